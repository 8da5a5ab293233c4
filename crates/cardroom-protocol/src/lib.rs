//! Wire protocol for the cardroom server.
//!
//! This crate defines the language that clients and the server speak:
//!
//! - **Types** ([`ClientEvent`], [`ServerEvent`], [`Player`], the identifier
//!   newtypes) — the structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages become
//!   bytes and back.
//! - **Errors** ([`ProtocolError`]) — what can go wrong in between.
//!
//! The protocol layer knows nothing about connections or rooms. It sits
//! between the transport (raw frames) and the gateway (session context):
//!
//! ```text
//! Transport (bytes) → Protocol (ClientEvent) → Gateway (session context)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{Card, ClientEvent, Player, Recipient, RoomId, ServerEvent, SessionId};
