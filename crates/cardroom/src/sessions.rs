//! Session bookkeeping: identifier generation and outbound channels.
//!
//! A session is one live connection. The gateway hands each one a random
//! opaque identifier at connect time and keeps an unbounded channel to the
//! connection's writer task; broadcasting means pushing an event into the
//! channels of every session in the audience. Nothing here survives a
//! disconnect.

use std::collections::HashMap;

use cardroom_protocol::{ServerEvent, SessionId};
use rand::Rng;
use tokio::sync::mpsc;

/// Channel sender delivering outbound events to one session's writer task.
pub(crate) type OutboundSender = mpsc::UnboundedSender<ServerEvent>;

/// Length of generated session identifiers.
const SESSION_ID_LEN: usize = 16;

/// Generates a fresh opaque session identifier.
///
/// Random alphanumeric, long enough that collisions are not a practical
/// concern for a process-lifetime id space.
pub(crate) fn generate_session_id() -> SessionId {
    let token: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect();
    SessionId::new(token)
}

/// Tracks every connected session's outbound channel.
#[derive(Debug, Default)]
pub(crate) struct SessionRegistry {
    senders: HashMap<SessionId, OutboundSender>,
}

impl SessionRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a session's outbound channel.
    pub(crate) fn register(&mut self, session_id: SessionId, sender: OutboundSender) {
        self.senders.insert(session_id, sender);
    }

    /// Drops a session's outbound channel. Its writer task sees the channel
    /// close and exits.
    pub(crate) fn unregister(&mut self, session_id: &SessionId) {
        self.senders.remove(session_id);
    }

    /// Enqueues an event for a single session. Silently drops it if the
    /// session is gone; delivery is fire-and-forget.
    pub(crate) fn send_to(&self, session_id: &SessionId, event: ServerEvent) {
        if let Some(sender) = self.senders.get(session_id) {
            let _ = sender.send(event);
        }
    }

    /// Number of connected sessions.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_have_expected_length() {
        let id = generate_session_id();
        assert_eq!(id.as_str().len(), SESSION_ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[test]
    fn test_send_to_unknown_session_is_silent() {
        let registry = SessionRegistry::new();
        // Must not panic, must not block.
        registry.send_to(
            &SessionId::new("ghost"),
            ServerEvent::UpdatePlayers(vec![]),
        );
    }

    #[test]
    fn test_register_send_unregister() {
        let mut registry = SessionRegistry::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sid = SessionId::new("s1");

        registry.register(sid.clone(), tx);
        registry.send_to(&sid, ServerEvent::UpdatePlayers(vec![]));
        assert!(rx.try_recv().is_ok());

        registry.unregister(&sid);
        assert_eq!(registry.len(), 0);
        // The channel closes once the last sender is dropped.
        assert!(rx.try_recv().is_err());
    }
}
