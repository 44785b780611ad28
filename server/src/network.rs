//! Server network layer owning the TCP listener and the shared scoreboard

use crate::routes;
use crate::scoreboard::Scoreboard;
use log::info;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// HTTP server bound to a socket, serving one scoreboard
pub struct Server {
    listener: TcpListener,
    scoreboard: Arc<Scoreboard>,
}

impl Server {
    /// Binds `addr` and creates an empty scoreboard. Port 0 picks a free port.
    pub async fn new(addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on {}", listener.local_addr()?);

        Ok(Server {
            listener,
            scoreboard: Arc::new(Scoreboard::new()),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Handle to the scoreboard served by this server
    pub fn scoreboard(&self) -> Arc<Scoreboard> {
        Arc::clone(&self.scoreboard)
    }

    /// Serves requests until the process exits
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.run_until(std::future::pending()).await
    }

    /// Serves requests until `shutdown` resolves, then lets in-flight
    /// requests finish
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = routes::router(Arc::clone(&self.scoreboard));

        info!("Server started successfully");
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(
            "Server shutting down with {} teams on the scoreboard",
            self.scoreboard.team_count()
        );
        Ok(())
    }
}
