//! Codec trait and the JSON implementation.
//!
//! A codec converts between protocol types and raw bytes. The gateway and
//! transport never serialize anything themselves; they go through a
//! [`Codec`] so the wire representation is decided in exactly one place.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes protocol types to bytes and decodes bytes back.
///
/// The methods are generic over the message type rather than fixed to
/// [`ClientEvent`](crate::ClientEvent) / [`ServerEvent`](crate::ServerEvent)
/// so tests and tools can push arbitrary serde types through the same
/// implementation.
///
/// `Send + Sync + 'static` because a codec is shared across every
/// connection task for the lifetime of the server.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or do
    /// not match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// JSON is what the existing clients speak, and it keeps every frame
/// readable in browser DevTools and in logs.
///
/// ## Example
///
/// ```rust
/// use cardroom_protocol::{Codec, JsonCodec, ServerEvent, SessionId};
///
/// let codec = JsonCodec;
///
/// let event = ServerEvent::ConnectionSuccess {
///     message: "hello".into(),
///     socket_id: SessionId::new("s1"),
/// };
///
/// let bytes = codec.encode(&event).unwrap();
/// let decoded: ServerEvent = codec.decode(&bytes).unwrap();
/// assert_eq!(event, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
