use url_alias::config;
use url_alias::server;
use url_alias::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    telemetry::init(&config)?;

    tracing::info!(env = %config.env, "starting url-alias");
    tracing::debug!("debug logging enabled");
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
