//! Unified error type for the server crate.

use cardroom_protocol::ProtocolError;
use cardroom_transport::TransportError;

/// Top-level error wrapping the layer-specific errors.
///
/// The `#[from]` attributes generate the `From` impls, so `?` converts
/// layer errors automatically. Note what is NOT here: the coordinator has
/// no error type at all. Bad client input is absorbed as silent no-ops,
/// never surfaced as failures.
#[derive(Debug, thiserror::Error)]
pub enum CardroomError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
