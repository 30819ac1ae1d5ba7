use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use progress_updates::modules::progress::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use progress_updates::modules::progress::use_cases::submit_update::handler::SubmitUpdateHandler;
use progress_updates::shell::config::Config;
use progress_updates::shell::http;
use progress_updates::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // In-memory store for now
    let store = Arc::new(InMemoryProgressStore::new());
    match &config.store_credentials {
        Some(credentials) => {
            tracing::info!(user = %credentials.user, "store credentials configured")
        }
        None => tracing::warn!("no store credentials configured; keeping the in-memory store"),
    }

    let submit_handler = Arc::new(SubmitUpdateHandler::new(store.clone()));
    let state = AppState {
        submit_handler,
        store,
    };

    let app = http::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
