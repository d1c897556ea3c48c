//! Listener lifecycle: bind at startup, release on shutdown.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// How long [`ServerHandle::shutdown`] waits for serve tasks to wind down.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to set up IPv6 listener: {0}")]
    Ipv6(#[source] std::io::Error),
}

/// Where to listen.
#[derive(Debug, Clone, Copy)]
pub struct BindOptions {
    pub port: u16,
    /// false: 127.0.0.1 only. true: 0.0.0.0 and [::].
    pub public: bool,
}

/// A running query endpoint. Dropping the handle stops the listeners.
pub struct ServerHandle {
    shutdown_tx: broadcast::Sender<()>,
    tasks: Vec<JoinHandle<()>>,
    local_addrs: Vec<SocketAddr>,
}

impl ServerHandle {
    /// Actual bound addresses (useful when binding port 0).
    pub fn local_addrs(&self) -> &[SocketAddr] {
        &self.local_addrs
    }

    /// Close every listener and wait briefly for serve tasks to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(());
        let tasks = std::mem::take(&mut self.tasks);
        for task in tasks {
            if tokio::time::timeout(SHUTDOWN_GRACE, task).await.is_err() {
                tracing::warn!("HTTP task did not stop within {:?}", SHUTDOWN_GRACE);
            }
        }
        tracing::info!("query endpoint closed");
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Bind the listener(s) and start serving `app` on each.
pub async fn start(options: BindOptions, app: Router) -> Result<ServerHandle, ServerError> {
    let listeners = if options.public {
        bind_dual_stack(options.port).await?
    } else {
        vec![bind_v4(Ipv4Addr::LOCALHOST, options.port).await?]
    };

    let (shutdown_tx, _) = broadcast::channel::<()>(4);
    let mut tasks = Vec::with_capacity(listeners.len());
    let mut local_addrs = Vec::with_capacity(listeners.len());

    for listener in listeners {
        let addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind {
                addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, options.port)),
                source,
            })?;
        tracing::info!("Serving now-playing query on http://{}/query", addr);
        local_addrs.push(addr);

        let app = app.clone();
        let mut rx = shutdown_tx.subscribe();
        tasks.push(tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = rx.recv().await;
                })
                .await
                .unwrap_or_else(|e| tracing::error!("HTTP server error on {}: {}", addr, e));
        }));
    }

    Ok(ServerHandle {
        shutdown_tx,
        tasks,
        local_addrs,
    })
}

async fn bind_v4(ip: Ipv4Addr, port: u16) -> Result<TcpListener, ServerError> {
    let addr = SocketAddr::from((ip, port));
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Separate IPv4 and IPv6 sockets. IPV6_V6ONLY is set explicitly: Linux
/// defaults it to false, which makes the second bind fail with AddrInUse.
async fn bind_dual_stack(port: u16) -> Result<Vec<TcpListener>, ServerError> {
    let v4 = bind_v4(Ipv4Addr::UNSPECIFIED, port).await?;
    // Follow the IPv4 port when the caller asked for an ephemeral one.
    let port = v4.local_addr().map(|a| a.port()).unwrap_or(port);
    let v6 = bind_v6(SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)))?;
    Ok(vec![v4, v6])
}

fn bind_v6(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let socket = socket2::Socket::new(
        socket2::Domain::IPV6,
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )
    .map_err(ServerError::Ipv6)?;
    if let Err(e) = socket.set_only_v6(true) {
        tracing::warn!("Could not set IPV6_V6ONLY: {} -- dual-bind may fail on Linux", e);
    }
    if let Err(e) = socket.set_reuse_address(true) {
        tracing::warn!("Could not set SO_REUSEADDR on IPv6 socket: {}", e);
    }
    socket.set_nonblocking(true).map_err(ServerError::Ipv6)?;
    socket
        .bind(&addr.into())
        .map_err(|source| ServerError::Bind { addr, source })?;
    socket.listen(1024).map_err(ServerError::Ipv6)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener).map_err(ServerError::Ipv6)
}
