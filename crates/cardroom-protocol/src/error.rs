//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire messages.
///
/// Decode failures are routine (clients can send anything); the gateway
/// logs them and drops the frame. Encode failures indicate a server-side
/// bug and surface through the top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, an unknown event name, or a
    /// payload missing required fields.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
