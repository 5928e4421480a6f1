use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use env_helpers::get_env_default;
use url::Url;

use crate::infra::http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};

pub const DEFAULT_WAITLIST_URL: &str = "http://127.0.0.1:3000/api/waitlist";

pub struct AppConfig {
    /// The waitlist listing endpoint. Fetched with a plain GET.
    pub waitlist_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Mount, print the result once and exit instead of reading commands.
    pub run_once: bool,
    pub output_format: OutputFormat,
    /// When set, structured JSON logs are also written to this file.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let waitlist_url: String =
            get_env_default("WAITLIST_URL", DEFAULT_WAITLIST_URL.to_string());
        let waitlist_url = parse_endpoint(&waitlist_url)?;

        let connect_timeout_secs: u64 =
            get_env_default("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT.as_secs());
        let request_timeout_secs: u64 =
            get_env_default("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT.as_secs());
        let run_once: bool = get_env_default("WAITLIST_ONCE", false);

        let output_format: String = get_env_default("OUTPUT_FORMAT", "text".to_string());
        let output_format: OutputFormat = output_format
            .parse()
            .map_err(anyhow::Error::msg)
            .context("OUTPUT_FORMAT must be `text` or `json`")?;

        let log_file = std::env::var("LOG_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            waitlist_url,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
            run_once,
            output_format,
            log_file,
        })
    }
}

/// Parses the endpoint, accepting only http(s) URLs.
pub fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("WAITLIST_URL is not a valid URL: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("WAITLIST_URL must use http or https, got `{other}`"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}
