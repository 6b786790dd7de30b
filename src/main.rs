use anyhow::{Context, Result};
use tracing::info;
use translation_proxy::{
    config::Config,
    server::{self, AppState},
    translator::TranslatorClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_proxy=info".parse()?),
        )
        .init();

    info!("Starting translation proxy");

    // Load configuration from environment
    let config = Config::from_env()?;
    let translator = TranslatorClient::from_config(&config)?;

    info!(
        "Forwarding to {} (region: {}, timeout: {}s)",
        translator.endpoint(),
        config.translator_region,
        config.request_timeout_secs
    );

    let app = server::router(AppState::new(translator));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("Listening on http://{}", address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
