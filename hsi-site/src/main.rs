//! hsi-site — Happy Society International site service
//!
//! Long-running service that:
//! - Serves localized page payloads for the seven site languages
//! - Resolves the chapter directory with its availability fallback
//! - Accepts lead-capture submissions (newsletter, membership,
//!   chapter/partnership applications, contact form)

use hsi_site::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hsi_site=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting hsi-site (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config)?;

    // Build router
    let app = api::create_router(state);

    // Start HTTP server
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("hsi-site listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
