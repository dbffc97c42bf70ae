use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::responder::StaticResponder;
use crate::files::store::FileStore;
use crate::http::connection::Connection;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        cfg.static_files.root.display()
    );

    let responder = Arc::new(StaticResponder::from_disk(cfg.static_files.clone()));
    serve(listener, responder).await
}

/// Accepts connections forever, one task per connection. Accept errors are
/// logged and never end the loop.
pub async fn serve<S: FileStore>(
    listener: TcpListener,
    responder: Arc<StaticResponder<S>>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                // EMFILE and ECONNABORTED clear up on their own
                tracing::error!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let responder = Arc::clone(&responder);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, responder);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
