use creative_service::config::CreativeConfig;
use creative_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CreativeConfig::load()?;

    init_tracing("creative-service", &config.common.log_level);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
