use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    info,
    management::MemoryTokenStore,
    spotify::SpotifyClient,
    success, warning,
};

/// Routes of the relay bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/auth/login", get(api::login))
        .route("/auth/callback", get(api::callback))
        .route("/me", get(api::me))
        .with_state(state)
}

/// Serves the relay on `0.0.0.0:<port>` until Ctrl-C.
///
/// When `open_browser` is set the login URL is opened in the default
/// browser once the listener is bound.
pub async fn start_api_server(config: Config, open_browser: bool) -> Res<()> {
    let spotify = SpotifyClient::new(&config)?;
    let state = AppState::new(
        spotify,
        Arc::new(MemoryTokenStore::new()),
        config.secure_cookies(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Spotify relay listening on {}", listener.local_addr()?);

    let login_url = config.login_url();
    if open_browser && webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        );
    } else {
        info!("Log in at {}", login_url);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    success!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        warning!("Failed to listen for Ctrl-C; stop the process to shut down");
        std::future::pending::<()>().await;
    }
}
