use std::io::{Cursor, Write};
use std::path::Path;
use std::time::Duration;

use dart_core::client::{DartClient, DartClientConfig};
use dart_core::services::{DartContext, DartContextConfig};
use dart_model::requests::{
    CorpCodeParams,
    DisclosureSearchParams,
    EventPeriodParams,
    PeriodicReportParams,
    ReceiptParams,
    XbrlParams,
};
use dart_model::schema::{REPORT_ANNUAL, REPORT_HALF};
use wiremock::matchers::{
    body_string_contains,
    method,
    path,
    query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::SimpleFileOptions;

const API_KEY: &str = "test-key";

fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(body.as_bytes()).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

fn context(base_url: &str, data_dir: &Path) -> DartContext {
    let client = DartClientConfig::new(API_KEY)
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    DartContext::new(DartContextConfig::new(client, data_dir)).expect("context should build")
}

#[tokio::test]
async fn search_sends_key_and_only_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list.json"))
        .and(query_param("crtfc_key", API_KEY))
        .and(query_param("corp_code", "00126380"))
        .and(query_param_is_missing("bgn_de"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"000","message":"정상","page_no":1,"total_count":1,"list":[{"rcept_no":"20240312000736"}]}"#,
            "application/json;charset=UTF-8",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let params = DisclosureSearchParams {
        corp_code: Some("00126380".to_string()),
        ..Default::default()
    };
    let envelope = context.disclosure.search_disclosures(&params).await;

    assert!(envelope.is_success(), "{envelope:?}");
    assert_eq!(envelope.message, "정상");
    let content = envelope.content.expect("content");
    assert_eq!(content["total_count"], 1);
    assert!(content.get("status").is_none());
}

#[tokio::test]
async fn missing_required_params_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/irdsSttus.json"))
        .and(query_param("corp_code", ""))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"100","message":"필수값(corp_code)이 누락되었습니다."}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let params = PeriodicReportParams {
        corp_code: String::new(),
        bsns_year: "2023".to_string(),
        reprt_code: REPORT_HALF.to_string(),
    };
    let envelope = context.periodic.capital_changes(&params).await;

    assert_eq!(envelope.status, "100");
    assert!(!envelope.is_success());
    assert!(envelope.error.is_none());
}

#[tokio::test]
async fn unreachable_host_yields_failure_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");
    let context = context("http://127.0.0.1:9", dir.path());

    let envelope = context
        .ownership
        .major_stock_reports(&CorpCodeParams {
            corp_code: "00126380".to_string(),
        })
        .await;

    assert_ne!(envelope.status, "000");
    assert!(envelope.error.is_some());
    assert!(envelope.content.is_none());
}

#[tokio::test]
async fn http_error_status_yields_failure_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/company.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let envelope = context
        .disclosure
        .company_overview(&CorpCodeParams {
            corp_code: "00126380".to_string(),
        })
        .await;

    assert_eq!(envelope.status, "900");
    assert!(envelope.message.contains("503"));
    assert_eq!(envelope.error.as_deref(), Some("maintenance"));
}

#[tokio::test]
async fn document_download_extracts_and_removes_archive() {
    let server = MockServer::start().await;
    let archive = zip_bytes(&[("20240312000736.xml", "<DOCUMENT><BODY/></DOCUMENT>")]);
    Mock::given(method("GET"))
        .and(path("/document.xml"))
        .and(query_param("rcept_no", "20240312000736"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(archive, "application/zip"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let envelope = context
        .disclosure
        .download_document(&ReceiptParams {
            rcept_no: "20240312000736".to_string(),
        })
        .await;

    let extracted = dir.path().join("documents").join("20240312000736");
    assert!(envelope.is_success(), "{envelope:?}");
    assert_eq!(envelope.saved_path, Some(extracted.display().to_string()));
    assert!(extracted.join("20240312000736.xml").exists());
    assert!(!dir.path().join("documents").join("20240312000736.zip").exists());
}

#[tokio::test]
async fn archive_endpoint_error_body_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fnlttXbrl.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><result><status>014</status><message>파일이 존재하지 않습니다.</message></result>",
            "application/xml",
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let envelope = context
        .financial
        .download_xbrl(&XbrlParams {
            rcept_no: "20240312000736".to_string(),
            reprt_code: REPORT_ANNUAL.to_string(),
        })
        .await;

    assert_eq!(envelope.status, "014");
    assert_eq!(envelope.message, "파일이 존재하지 않습니다.");
    assert!(envelope.saved_path.is_none());
    assert!(envelope.extract_error.is_none());
    assert!(!dir.path().join("xbrl").exists());
}

#[tokio::test]
async fn corp_code_download_refreshes_index() {
    let server = MockServer::start().await;
    let listing = "<result><list><corp_code>00126380</corp_code><corp_name>삼성전자</corp_name><stock_code>005930</stock_code><modify_date>20230110</modify_date></list></result>";
    Mock::given(method("GET"))
        .and(path("/corpCode.xml"))
        .and(query_param("crtfc_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            zip_bytes(&[("CORPCODE.xml", listing)]),
            "application/x-msdownload",
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    assert!(context.corp_codes.search("삼성").await.is_err());

    let envelope = context.disclosure.download_corp_codes().await;

    assert!(envelope.is_success(), "{envelope:?}");
    assert_eq!(
        envelope.saved_path,
        Some(dir.path().join("CORPCODE.xml").display().to_string())
    );
    let found = context.corp_codes.search("삼성").await.expect("index loaded");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].corp_code, "00126380");
}

#[tokio::test]
async fn corp_code_download_installs_listing_at_configured_path() {
    let server = MockServer::start().await;
    let listing = "<result><list><corp_code>00164779</corp_code><corp_name>SK하이닉스</corp_name><stock_code>000660</stock_code><modify_date>20230301</modify_date></list></result>";
    Mock::given(method("GET"))
        .and(path("/corpCode.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            zip_bytes(&[("CORPCODE.xml", listing)]),
            "application/zip",
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let installed = dir.path().join("CORPCODE-installed.xml");
    let client = DartClientConfig::new(API_KEY).with_base_url(server.uri());
    let config = DartContextConfig::new(client, dir.path()).with_corp_code_path(&installed);
    let context = DartContext::new(config).expect("context should build");

    let envelope = context.disclosure.download_corp_codes().await;

    assert!(envelope.is_success(), "{envelope:?}");
    assert!(envelope.extract_error.is_none(), "{envelope:?}");
    assert_eq!(envelope.saved_path, Some(installed.display().to_string()));
    assert!(installed.exists());
    let found = context
        .corp_codes
        .find_by_stock_code("000660")
        .await
        .expect("index loaded");
    assert_eq!(found.map(|record| record.corp_code), Some("00164779".to_string()));
}

#[tokio::test]
async fn event_endpoints_use_date_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dfOcr.json"))
        .and(query_param("bgn_de", "20230101"))
        .and(query_param("end_de", "20231231"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"013","message":"조회된 데이타가 없습니다."}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let context = context(&server.uri(), dir.path());
    let envelope = context
        .major_events
        .default_occurrence(&EventPeriodParams {
            corp_code: "00126380".to_string(),
            bgn_de: "20230101".to_string(),
            end_de: "20231231".to_string(),
        })
        .await;

    assert_eq!(envelope.status, "013");
}

#[tokio::test]
async fn post_sends_form_encoded_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/company.json"))
        .and(body_string_contains("crtfc_key=test-key"))
        .and(body_string_contains("corp_code=00126380"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"000","message":"정상","corp_name":"삼성전자"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = DartClient::new(DartClientConfig::new(API_KEY).with_base_url(server.uri()))
        .expect("client should build");
    let envelope = client
        .post(
            "company.json",
            &CorpCodeParams {
                corp_code: "00126380".to_string(),
            },
        )
        .await;

    assert!(envelope.is_success(), "{envelope:?}");
    assert_eq!(envelope.content.expect("content")["corp_name"], "삼성전자");
}
