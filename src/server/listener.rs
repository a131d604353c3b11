use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::RequestHandler;

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let listener = TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
    info!("Listening on {}:{}", cfg.host, cfg.port);

    serve(listener, cfg).await
}

/// Accept loop over an already bound listener. Each connection is handled in
/// its own task; with `max_connections` set, accepting waits for a free slot.
pub async fn serve(listener: TcpListener, cfg: Arc<Config>) -> anyhow::Result<()> {
    let handler = RequestHandler::new(cfg.clone());
    let slots = cfg.max_connections.map(|n| Arc::new(Semaphore::new(n)));

    loop {
        let permit = match &slots {
            Some(slots) => Some(slots.clone().acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                back_off_after(&e).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            drop(permit);
        });
    }
}

/// Persistent errors like EMFILE would otherwise spin the accept loop.
async fn back_off_after(error: &std::io::Error) {
    tracing::warn!(error = %error, "Failed to accept connection");
    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
}
