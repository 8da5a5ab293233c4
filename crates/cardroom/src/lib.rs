//! # cardroom
//!
//! A minimal real-time room coordinator for multiplayer card games.
//!
//! Clients connect over WebSocket, join named rooms, broadcast card plays,
//! and receive membership and turn updates. There is no rule engine: card
//! legality, deck composition, and scoring are entirely client concerns.
//! The server is the meeting point, not the referee.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cardroom::{CardroomServerBuilder, ServerConfig};
//!
//! # async fn run() -> Result<(), cardroom::CardroomError> {
//! let config = ServerConfig::from_env();
//! let server = CardroomServerBuilder::new()
//!     .bind(&config.bind_addr())
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod gateway;
mod server;
mod sessions;

pub use config::ServerConfig;
pub use error::CardroomError;
pub use server::{CardroomServer, CardroomServerBuilder};
