use log::{error, info, warn};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::error::TerminalError;
use crate::middleware::logging::{log_connection, log_disconnection};
use crate::session::{SessionOptions, run_session};

/// Bookkeeping for a connected client.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub connected_at: Instant,
}

pub type ClientRegistry = Arc<Mutex<HashMap<SocketAddr, ClientInfo>>>;

pub struct Server {
    client_registry: ClientRegistry,
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the listener described by `config`.
    pub async fn bind(config: ServerConfig) -> Result<Self, TerminalError> {
        let socket = config.listen_socket();
        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(e.into());
            }
        };

        info!("Server bound to {}", listener.local_addr()?);

        Ok(Self {
            client_registry: Arc::new(Mutex::new(HashMap::new())),
            listener,
            config: Arc::new(config),
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Shared handle to the registry of connected clients.
    pub fn client_registry(&self) -> ClientRegistry {
        Arc::clone(&self.client_registry)
    }

    /// Runs the accept loop forever.
    pub async fn start(&self) {
        info!(
            "Starting MI5 terminal server on {} (max {} clients)",
            self.config.listen_socket(),
            self.config.max_clients
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let client_registry = Arc::clone(&self.client_registry);
                    let config = Arc::clone(&self.config);

                    // Spawn a task for each client so accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_new_client(stream, addr, client_registry, config).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Handles a new client: enforces the session limit, registers, and runs the session.
async fn handle_new_client(
    mut stream: TcpStream,
    client_addr: SocketAddr,
    client_registry: ClientRegistry,
    config: Arc<ServerConfig>,
) -> Result<(), std::io::Error> {
    {
        let mut clients = client_registry.lock().await;

        if clients.len() >= config.max_clients {
            drop(clients);
            warn!("Rejecting {}: session limit reached", client_addr);
            stream
                .write_all(b"Too many connections. Try again later.\r\n")
                .await?;
            stream.shutdown().await?;
            return Ok(()); // Close connection
        }

        clients.insert(
            client_addr,
            ClientInfo {
                connected_at: Instant::now(),
            },
        );
        log_connection(&client_addr.to_string(), clients.len(), config.max_clients);
    }

    let options = SessionOptions::from(config.as_ref());
    let peer = client_addr.to_string();
    let (read_half, write_half) = stream.into_split();

    let outcome = run_session(BufReader::new(read_half), write_half, &options, &peer).await;

    let info = client_registry.lock().await.remove(&client_addr);
    let elapsed = info
        .map(|info| info.connected_at.elapsed())
        .unwrap_or_default();

    match outcome {
        Ok(commands) => {
            log_disconnection(&peer, commands, elapsed);
            Ok(())
        }
        Err(e) => {
            log_disconnection(&peer, 0, elapsed);
            Err(e)
        }
    }
}
