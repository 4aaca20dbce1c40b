use daily_checkin::{CheckinClient, ClientConfig, TerminalHost};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let client = CheckinClient::new(&config)?;
    let host = TerminalHost::new(config.base_url.clone());

    info!("checking in at {}", client.endpoint());
    client.daily_checkin(&host).await?;

    Ok(())
}
