use tracing_subscriber::EnvFilter;

use muster::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = startup::load_catalog(&config).unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();
    startup::seed_staff_users(&db, &config).await.unwrap();
    startup::seed_form_templates(&db, &catalog).await.unwrap();

    let session = startup::session_layer();

    let state = AppState {
        db,
        catalog: std::sync::Arc::new(catalog),
    };

    let app = router::routes().with_state(state).layer(session);

    tracing::info!(address = %config.bind_address, "Starting server");

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
