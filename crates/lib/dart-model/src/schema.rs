pub const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";
pub const API_KEY_PARAM: &str = "crtfc_key";

pub const STATUS_OK: &str = "000";
pub const STATUS_NO_DATA: &str = "013";
pub const STATUS_NO_FILE: &str = "014";
pub const STATUS_UNDEFINED_ERROR: &str = "900";

pub const CORP_CODE_FILE_NAME: &str = "CORPCODE.xml";
pub const DOCUMENTS_DIR: &str = "documents";
pub const XBRL_DIR: &str = "xbrl";

// DS001 disclosure information
pub const EP_DISCLOSURE_LIST: &str = "list.json";
pub const EP_COMPANY: &str = "company.json";
pub const EP_DOCUMENT: &str = "document.xml";
pub const EP_CORP_CODE: &str = "corpCode.xml";

// DS002 periodic report key items
pub const EP_CAPITAL_CHANGES: &str = "irdsSttus.json";
pub const EP_DIVIDENDS: &str = "alotMatter.json";
pub const EP_TREASURY_STOCK: &str = "tesstkAcqsDspsSttus.json";
pub const EP_LARGEST_SHAREHOLDERS: &str = "hyslrSttus.json";
pub const EP_LARGEST_SHAREHOLDER_CHANGES: &str = "hyslrChgSttus.json";
pub const EP_MINORITY_SHAREHOLDERS: &str = "mrhlSttus.json";
pub const EP_EXECUTIVES: &str = "exctvSttus.json";
pub const EP_EMPLOYEES: &str = "empSttus.json";
pub const EP_DIRECTOR_INDIVIDUAL_PAY: &str = "hmvAuditIndvdlBySttus.json";
pub const EP_DIRECTOR_TOTAL_PAY: &str = "hmvAuditAllSttus.json";
pub const EP_TOP_INDIVIDUAL_PAY: &str = "indvdlByPay.json";
pub const EP_OTHER_CORP_INVESTMENTS: &str = "otrCprInvstmntSttus.json";
pub const EP_STOCK_TOTALS: &str = "stockTotqySttus.json";
pub const EP_DEBT_SECURITIES_ISSUANCE: &str = "detScritsIsuAcmslt.json";
pub const EP_COMMERCIAL_PAPER_BALANCE: &str = "entrprsBilScritsNrdmpBlce.json";
pub const EP_SHORT_TERM_BOND_BALANCE: &str = "srtpdPsndbtNrdmpBlce.json";
pub const EP_CORPORATE_BOND_BALANCE: &str = "cprndNrdmpBlce.json";
pub const EP_HYBRID_SECURITIES_BALANCE: &str = "newCaplScritsNrdmpBlce.json";
pub const EP_CONTINGENT_CAPITAL_BALANCE: &str = "cndlCaplScritsNrdmpBlce.json";
pub const EP_AUDITOR_OPINION: &str = "accnutAdtorNmNdAdtOpinion.json";
pub const EP_AUDIT_SERVICE_CONTRACTS: &str = "adtServcCnclsSttus.json";
pub const EP_NON_AUDIT_SERVICE_CONTRACTS: &str = "accnutAdtorNonAdtServcCnclsSttus.json";
pub const EP_OUTSIDE_DIRECTORS: &str = "outcmpnyDrctrNdChangeSttus.json";
pub const EP_UNREGISTERED_EXECUTIVE_PAY: &str = "unrstExctvMendngSttus.json";
pub const EP_DIRECTOR_PAY_APPROVED: &str = "drctrAdtAllMendngSttusGmtsckConfmAmount.json";
pub const EP_DIRECTOR_PAY_BY_TYPE: &str = "drctrAdtAllMendngSttusMendngPymntamtTyCl.json";
pub const EP_PUBLIC_OFFERING_FUND_USAGE: &str = "pssrpCptalUseDtls.json";
pub const EP_PRIVATE_PLACEMENT_FUND_USAGE: &str = "prvsrpCptalUseDtls.json";

// DS003 financial statements
pub const EP_SINGLE_ACCOUNTS: &str = "fnlttSinglAcnt.json";
pub const EP_MULTI_ACCOUNTS: &str = "fnlttMultiAcnt.json";
pub const EP_XBRL: &str = "fnlttXbrl.xml";
pub const EP_SINGLE_FULL_STATEMENTS: &str = "fnlttSinglAcntAll.json";
pub const EP_XBRL_TAXONOMY: &str = "xbrlTaxonomy.json";
pub const EP_SINGLE_INDICATORS: &str = "fnlttSinglIndx.json";
pub const EP_MULTI_INDICATORS: &str = "fnlttCmpnyIndx.json";

// DS004 ownership disclosures
pub const EP_MAJOR_STOCK: &str = "majorstock.json";
pub const EP_EXECUTIVE_STOCK: &str = "elestock.json";

// DS005 major event reports
pub const EP_DEFAULT_OCCURRENCE: &str = "dfOcr.json";
pub const EP_BUSINESS_SUSPENSION: &str = "bsnSp.json";
pub const EP_REHABILITATION_FILING: &str = "ctrcvsBgrq.json";
pub const EP_DISSOLUTION_CAUSE: &str = "dsRsOcr.json";
pub const EP_PAID_IN_CAPITAL_INCREASE: &str = "piicDecsn.json";
pub const EP_BONUS_ISSUE: &str = "fricDecsn.json";
pub const EP_PAID_AND_BONUS_ISSUE: &str = "pifricDecsn.json";
pub const EP_CAPITAL_REDUCTION: &str = "crDecsn.json";
pub const EP_CREDITOR_MANAGEMENT_START: &str = "bnkMngtPcbg.json";
pub const EP_LAWSUITS: &str = "lwstLg.json";
pub const EP_OVERSEAS_LISTING_DECISION: &str = "ovLstDecsn.json";
pub const EP_OVERSEAS_DELISTING_DECISION: &str = "ovDlstDecsn.json";
pub const EP_OVERSEAS_LISTING: &str = "ovLst.json";
pub const EP_OVERSEAS_DELISTING: &str = "ovDlst.json";
pub const EP_CONVERTIBLE_BOND_ISSUE: &str = "cvbdIsDecsn.json";
pub const EP_BOND_WITH_WARRANT_ISSUE: &str = "bdwtIsDecsn.json";
pub const EP_EXCHANGEABLE_BOND_ISSUE: &str = "exbdIsDecsn.json";
pub const EP_CREDITOR_MANAGEMENT_STOP: &str = "bnkMngtPcsp.json";
pub const EP_WRITE_DOWN_CONTINGENT_BOND_ISSUE: &str = "wdCocobdIsDecsn.json";
pub const EP_ASSET_TRANSFER_PUT_BACK: &str = "astInhtrfEtcPtbkOpt.json";
pub const EP_TANGIBLE_ASSET_ACQUISITION: &str = "tgastInhDecsn.json";
pub const EP_TANGIBLE_ASSET_DISPOSAL: &str = "tgastTrfDecsn.json";
pub const EP_EQUITY_INVESTMENT_ACQUISITION: &str = "otcprStkInvscrInhDecsn.json";
pub const EP_EQUITY_INVESTMENT_DISPOSAL: &str = "otcprStkInvscrTrfDecsn.json";
pub const EP_EQUITY_LINKED_BOND_ACQUISITION: &str = "stkrtbdInhDecsn.json";
pub const EP_EQUITY_LINKED_BOND_DISPOSAL: &str = "stkrtbdTrfDecsn.json";
pub const EP_BUSINESS_ACQUISITION: &str = "bsnInhDecsn.json";
pub const EP_BUSINESS_TRANSFER: &str = "bsnTrfDecsn.json";
pub const EP_MERGER_DECISION: &str = "cmpMgDecsn.json";
pub const EP_SPLIT_DECISION: &str = "cmpDvDecsn.json";
pub const EP_SPLIT_MERGER_DECISION: &str = "cmpDvmgDecsn.json";
pub const EP_STOCK_EXCHANGE_DECISION: &str = "stkExtrDecsn.json";
pub const EP_TREASURY_ACQUISITION_DECISION: &str = "tsstkAqDecsn.json";
pub const EP_TREASURY_DISPOSAL_DECISION: &str = "tsstkDpDecsn.json";
pub const EP_TREASURY_TRUST_CONTRACT: &str = "tsstkAqTrctrCnsDecsn.json";
pub const EP_TREASURY_TRUST_TERMINATION: &str = "tsstkAqTrctrCcDecsn.json";

// DS006 securities registration statements
pub const EP_EQUITY_REGISTRATION: &str = "estkRs.json";
pub const EP_DEBT_REGISTRATION: &str = "bdRs.json";
pub const EP_DEPOSITARY_RECEIPT_REGISTRATION: &str = "stkdpRs.json";
pub const EP_MERGER_REGISTRATION: &str = "mgRs.json";
pub const EP_STOCK_EXCHANGE_REGISTRATION: &str = "extrRs.json";
pub const EP_DIVISION_REGISTRATION: &str = "dvRs.json";

/// Report codes accepted by `reprt_code`.
pub const REPORT_HALF: &str = "11012";
pub const REPORT_ANNUAL: &str = "11011";

/// Returns the documented meaning of an OpenDART status code.
#[must_use]
pub fn describe_status(status: &str) -> Option<&'static str> {
    let description = match status {
        "000" => "ok",
        "010" => "unregistered API key",
        "011" => "API key is not usable",
        "012" => "IP address not allowed",
        "013" => "no data found",
        "014" => "file does not exist",
        "020" => "request limit exceeded",
        "021" => "too many companies requested (max 100)",
        "100" => "invalid field value",
        "101" => "improper access",
        "800" => "system maintenance",
        "900" => "undefined error",
        "901" => "personal data retention period expired for this key",
        _ => return None,
    };
    Some(description)
}

/// Joins a base URL and an endpoint path with exactly one separator.
#[must_use]
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_normalizes_slashes() {
        assert_eq!(
            endpoint_url("https://opendart.fss.or.kr/api/", "/list.json"),
            "https://opendart.fss.or.kr/api/list.json"
        );
        assert_eq!(
            endpoint_url("http://127.0.0.1:9", "company.json"),
            "http://127.0.0.1:9/company.json"
        );
    }

    #[test]
    fn known_status_codes_are_described() {
        assert_eq!(describe_status(STATUS_NO_DATA), Some("no data found"));
        assert_eq!(describe_status(STATUS_NO_FILE), Some("file does not exist"));
        assert_eq!(describe_status("999"), None);
    }
}
