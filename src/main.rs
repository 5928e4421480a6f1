use dotenvy::dotenv;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{error, info};

use waitlist_console::infra::{
    config::AppConfig,
    console::{run_console, run_once},
    setup::{init_controller, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let controller = init_controller(&config)?;

    if config.run_once {
        let loaded = run_once(&controller, config.output_format, stdout()).await?;
        if !loaded {
            error!("Waitlist fetch failed");
            anyhow::bail!("failed to fetch waitlist from {}", config.waitlist_url);
        }
        return Ok(());
    }

    info!(endpoint = %config.waitlist_url, "Starting waitlist console");
    run_console(controller, BufReader::new(stdin()), stdout()).await
}
