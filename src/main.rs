use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mail_relay_api::app::create_app;
use mail_relay_api::config::AppConfig;
use mail_relay_api::state::SharedAppState;
use mail_relay_api::utils::init_email_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mail_relay_api=info,tower_http=info")),
    )
    .init();

  let config = AppConfig::from_env().inspect_err(|e| tracing::error!("Invalid configuration: {}", e))?;

  let transport = init_email_service(&config)?;
  let app_state = SharedAppState::new(config.sender.clone(), transport);
  let app = create_app(app_state, &config.cors_allowed_origins);

  let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

  tracing::info!("Server running on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("Server stopped");

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
