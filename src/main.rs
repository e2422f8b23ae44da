use bloodbank_api::{build_router, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bloodbank_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;

    // No retry: a database that is unreachable at startup is fatal.
    let pool = match connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "could not connect to the database");
            std::process::exit(1);
        }
    };
    tracing::info!("connected to the database");
    ensure_tables(&pool).await?;

    let app = build_router(AppState::new(pool, &config.auth));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
