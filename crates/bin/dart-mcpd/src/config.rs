use clap::{Parser, builder::BoolishValueParser};
use dart_core::client::DartClientConfig;
use dart_core::services::DartContextConfig;
use dart_model::schema::DEFAULT_BASE_URL;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "dart-mcpd", version, about = "OpenDART MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "DART_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "DART_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "DART_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[arg(long, env = "DART_CORP_CODE_PATH")]
    corp_code_path: Option<PathBuf>,

    #[arg(
        long,
        env = "DART_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(
        long = "stdio",
        env = "DART_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(long, env = "DART_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(long, env = "DART_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone)]
pub struct DartConfig {
    pub api_key: String,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub corp_code_path: Option<PathBuf>,
    pub request_timeout: Duration,
    pub enable_stdio: bool,
    pub mcp_http_addr: SocketAddr,
    pub log_filter: String,
}

impl fmt::Debug for DartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("data_dir", &self.data_dir)
            .field("corp_code_path", &self.corp_code_path)
            .field("request_timeout", &self.request_timeout)
            .field("enable_stdio", &self.enable_stdio)
            .field("mcp_http_addr", &self.mcp_http_addr)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl DartConfig {
    /// Parses the command line, falling back to the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` when the API key is missing or a value is invalid.
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }

    /// Settings for the shared OpenDART context.
    #[must_use]
    pub fn context_config(&self) -> DartContextConfig {
        let client = DartClientConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.request_timeout);
        let config = DartContextConfig::new(client, self.data_dir.clone());
        match &self.corp_code_path {
            Some(path) => config.with_corp_code_path(path.clone()),
            None => config,
        }
    }
}

impl TryFrom<CliArgs> for DartConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingSetting("DART_API_KEY"))?;

        let base_url = args.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "DART_BASE_URL",
                value: args.base_url,
            });
        }

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "DART_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        let corp_code_path = args
            .corp_code_path
            .filter(|path| !path.as_os_str().is_empty());

        Ok(Self {
            api_key,
            base_url,
            data_dir: args.data_dir,
            corp_code_path,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            enable_stdio: args.enable_stdio,
            mcp_http_addr: args.mcp_http_addr,
            log_filter: args.log,
        })
    }
}
