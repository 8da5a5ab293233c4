use cardroom::{CardroomServerBuilder, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr();

    let server = CardroomServerBuilder::new().bind(&addr).build().await?;
    tracing::info!(%addr, "cardroom server listening");

    server.run().await?;
    Ok(())
}
