use pitwall::server::{config::Config, model::app::AppState, router, startup};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), pitwall::server::error::Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let store_client = startup::build_store_client(&config)?;
    let bind_address = config.bind_address.clone();
    let router = router::routes(&config);

    tracing::info!(
        store = store_client.endpoint(),
        namespace = %config.metafield_namespace,
        "Starting server"
    );

    let app = router.with_state(AppState::from((store_client, config)));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
