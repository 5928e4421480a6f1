use crate::{
    adapters::http::waitlist_client::HttpWaitlistSource,
    infra::{config::AppConfig, http_client::try_build_client},
    use_cases::waitlist::{WaitlistController, WaitlistSource},
};
use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_controller(config: &AppConfig) -> anyhow::Result<Arc<WaitlistController>> {
    let client = try_build_client(config.connect_timeout, config.request_timeout)
        .context("Failed to build HTTP client")?;

    let source = Arc::new(HttpWaitlistSource::new(client, config.waitlist_url.clone()));
    info!(endpoint = %source.endpoint(), "Waitlist source configured");

    Ok(Arc::new(WaitlistController::new(
        source as Arc<dyn WaitlistSource>,
    )))
}

pub fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_console=info".into());

    // Console logs go to stderr; stdout belongs to the rendered view.
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    // Optional file (structured JSON logs)
    let json_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
