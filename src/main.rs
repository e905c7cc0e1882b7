use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use physics_tutor::content::load_bank;
use physics_tutor::state::AppState;
use physics_tutor::store::{JsonFileStore, ProgressStore};
use physics_tutor::{config, handlers};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "physics_tutor=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let app_config = config::load_config();

  let bank = match load_bank(config::question_bank_path(&app_config).as_deref()) {
    Ok(bank) => bank,
    Err(e) => {
      tracing::error!("Failed to load question bank: {}", e);
      std::process::exit(1);
    }
  };

  let store = JsonFileStore::new(config::progress_path(&app_config));
  // Refuse to serve over a corrupt progress file rather than overwrite it later
  if let Err(e) = store.load() {
    tracing::error!("{}", e);
    std::process::exit(1);
  }

  let app = handlers::router(AppState::new(Arc::new(bank), Arc::new(store)));

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::server_port());

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
