use anyhow::Result;
use city_explorer::{GatewayConfig, VERSION, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = GatewayConfig::load()?;
    telemetry::init(&config.logging)?;

    tracing::info!("city-explorer {} starting", VERSION);
    web::run(config).await
}
