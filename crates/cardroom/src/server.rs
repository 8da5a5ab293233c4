//! Server builder and accept loop.
//!
//! Ties the layers together: transport → protocol → gateway → coordinator.
//! One task per accepted connection; all of them share the gateway state
//! behind a single mutex (see the gateway module for the ordering
//! guarantee that lock provides).

use std::sync::Arc;

use cardroom_protocol::{Codec, JsonCodec};
use cardroom_transport::{Transport, WebSocketTransport};
use tokio::sync::Mutex;

use crate::CardroomError;
use crate::gateway::{Gateway, handle_connection};

/// Shared server state handed to each connection task.
pub(crate) struct ServerState<C: Codec> {
    /// Room registry + session channels, one lock for both so every inbound
    /// event is applied and fanned out as a single step.
    pub(crate) gateway: Mutex<Gateway>,
    pub(crate) codec: C,
}

/// Builder for configuring and starting a cardroom server.
///
/// # Example
///
/// ```rust,no_run
/// use cardroom::CardroomServerBuilder;
///
/// # async fn run() -> Result<(), cardroom::CardroomError> {
/// let server = CardroomServerBuilder::new()
///     .bind("0.0.0.0:3000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct CardroomServerBuilder {
    bind_addr: String,
}

impl CardroomServerBuilder {
    /// Creates a builder with the default bind address.
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the transport and builds the server with the JSON codec.
    pub async fn build(self) -> Result<CardroomServer<JsonCodec>, CardroomError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            gateway: Mutex::new(Gateway::new()),
            codec: JsonCodec,
        });

        Ok(CardroomServer { transport, state })
    }
}

impl Default for CardroomServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running cardroom server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct CardroomServer<C: Codec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<C>>,
}

impl<C: Codec> CardroomServer<C> {
    /// Creates a new builder.
    pub fn builder() -> CardroomServerBuilder {
        CardroomServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop until the process is terminated.
    ///
    /// Every accepted connection gets its own handler task; a failed accept
    /// is logged and the loop keeps going.
    pub async fn run(mut self) -> Result<(), CardroomError> {
        tracing::info!("cardroom server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(handle_connection(conn, state));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
