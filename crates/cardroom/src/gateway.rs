//! The connection gateway: maps transport events onto coordinator calls and
//! fans the results back out to the right sessions.
//!
//! Each accepted connection gets its own Tokio task running
//! [`handle_connection`]. The flow is:
//!   1. Generate a session id, register an outbound channel, send the
//!      `connection_success` greeting to that session only.
//!   2. Loop: receive frames, decode [`ClientEvent`], apply it to the
//!      shared [`Gateway`] state under its lock.
//!   3. On close or error: run disconnect cleanup and broadcast the
//!      shrunk rosters.
//!
//! All mutation and broadcast *enqueueing* happens inside one mutex, so
//! events are applied to a room strictly one at a time, in arrival order.
//! The actual socket writes run outside the lock in per-connection writer
//! tasks fed by unbounded channels.

use std::sync::Arc;

use cardroom_coordinator::Registry;
use cardroom_protocol::{ClientEvent, Codec, Recipient, ServerEvent, SessionId};
use cardroom_transport::{Connection, WebSocketConnection};
use tokio::sync::mpsc;

use crate::server::ServerState;
use crate::sessions::{OutboundSender, SessionRegistry, generate_session_id};

/// Greeting sent to every session right after it connects.
pub(crate) const GREETING: &str = "Connected to cardroom server";

/// The shared gateway state: the room registry plus the outbound channel of
/// every connected session.
///
/// Methods here are synchronous on purpose. The caller holds the state
/// mutex for exactly one inbound event, and nothing inside can block:
/// channel sends are non-blocking and dropped receivers are skipped.
pub(crate) struct Gateway {
    registry: Registry,
    sessions: SessionRegistry,
}

impl Gateway {
    pub(crate) fn new() -> Self {
        Self {
            registry: Registry::new(),
            sessions: SessionRegistry::new(),
        }
    }

    /// Registers a new session and greets it with its assigned id.
    pub(crate) fn connect(&mut self, session_id: SessionId, sender: OutboundSender) {
        self.sessions.register(session_id.clone(), sender);
        self.deliver(
            Recipient::Session(session_id.clone()),
            ServerEvent::ConnectionSuccess {
                message: GREETING.into(),
                socket_id: session_id,
            },
        );
    }

    /// Applies one decoded client event.
    pub(crate) fn handle_event(&mut self, session_id: &SessionId, event: ClientEvent) {
        match event {
            ClientEvent::JoinRoom {
                room_id,
                player_name,
            } => {
                let roster = self
                    .registry
                    .join(room_id.clone(), session_id.clone(), &player_name)
                    .to_vec();
                self.deliver(
                    Recipient::Room(room_id),
                    ServerEvent::UpdatePlayers(roster),
                );
            }

            ClientEvent::PlayCard {
                room_id,
                card,
                player_id,
            } => {
                // The claimed player_id is forwarded as-is; see the
                // coordinator docs for the trust boundary. A play against
                // an unknown or empty room returns None and nothing is
                // broadcast.
                if let Some(result) = self.registry.play_card(&room_id, player_id, card) {
                    self.deliver(
                        Recipient::Room(room_id),
                        ServerEvent::CardPlayed {
                            card: result.card,
                            player_id: result.player_id,
                            current_turn_index: result.current_turn_index,
                        },
                    );
                }
            }
        }
    }

    /// Removes the session from every room it joined, broadcasting each
    /// updated roster to that room's remaining members, then forgets the
    /// session's outbound channel.
    pub(crate) fn disconnect(&mut self, session_id: &SessionId) {
        for (room_id, roster) in self.registry.disconnect(session_id) {
            self.deliver(
                Recipient::Room(room_id),
                ServerEvent::UpdatePlayers(roster),
            );
        }
        self.sessions.unregister(session_id);
    }

    /// Resolves an audience and enqueues the event for each member.
    ///
    /// A room audience is its current roster: the sessions that joined and
    /// have not disconnected. Sessions whose channel is gone are skipped.
    fn deliver(&self, recipient: Recipient, event: ServerEvent) {
        match recipient {
            Recipient::Session(session_id) => {
                self.sessions.send_to(&session_id, event);
            }
            Recipient::Room(room_id) => {
                let Some(room) = self.registry.room(&room_id) else {
                    return;
                };
                for player in room.players() {
                    self.sessions.send_to(&player.id, event.clone());
                }
            }
        }
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<ServerState<C>>,
) {
    let session_id = generate_session_id();
    tracing::info!(conn_id = %conn.id(), %session_id, "session connected");

    let conn = Arc::new(conn);
    let (tx, rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(write_outbound(Arc::clone(&conn), rx, Arc::clone(&state)));

    state.gateway.lock().await.connect(session_id.clone(), tx);

    loop {
        match conn.recv().await {
            Ok(Some(data)) => {
                let event: ClientEvent = match state.codec.decode(&data) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::debug!(
                            %session_id,
                            error = %e,
                            "dropping undecodable frame"
                        );
                        continue;
                    }
                };
                state.gateway.lock().await.handle_event(&session_id, event);
            }
            Ok(None) => {
                tracing::info!(%session_id, "connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(%session_id, error = %e, "recv error");
                break;
            }
        }
    }

    state.gateway.lock().await.disconnect(&session_id);

    // Unregistering dropped the last sender, so the writer drains whatever
    // is already queued and exits on its own.
    let _ = writer.await;
    let _ = conn.close().await;
}

/// Drains a session's outbound channel onto its socket.
///
/// Fire-and-forget: an encode failure skips the event, a send failure ends
/// the task (the peer is gone and cleanup happens in the read path).
async fn write_outbound<C: Codec>(
    conn: Arc<WebSocketConnection>,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
    state: Arc<ServerState<C>>,
) {
    while let Some(event) = rx.recv().await {
        let bytes = match state.codec.encode(&event) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode outbound event");
                continue;
            }
        };
        if conn.send(&bytes).await.is_err() {
            break;
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
