use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::{apply_overrides, load_config};
use crate::errors::PlagiarismError;
use tracing::info;

pub async fn handle_serve(config_path: Option<&str>, args: ServeArgs) -> Result<(), PlagiarismError> {
    let mut config = load_config(config_path).await?;
    apply_overrides(&mut config, &args.detection);

    let mut server = config.server();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    config.server = Some(server.clone());

    // Stopwords load here; a failure stops startup before binding
    let state = api::create_app_state(&config)?;
    let app = api::build_router(state);

    info!(host = %server.host, port = server.port, "Starting API server");

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PlagiarismError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
