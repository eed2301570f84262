use activities::ActivityRegistry;
use mergington_api::{config::read_config, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = read_config().expect("Failed to read configuration");

    let app_state = AppState::new(ActivityRegistry::with_defaults());
    let app = router::create(app_state);

    let listener = tokio::net::TcpListener::bind(config.application.address())
        .await
        .expect("Failed to bind address");

    tracing::info!(
        "Listening on http://{}",
        listener.local_addr().expect("Failed to read local address")
    );

    axum::serve(listener, app).await.expect("Server crashed");
}
