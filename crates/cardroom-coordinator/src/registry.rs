//! The registry: every live room, and the transitions that mutate them.

use std::collections::HashMap;

use cardroom_protocol::{Card, Player, RoomId, SessionId};

use crate::Room;

/// The outcome of a recorded play, broadcast to the room as `card_played`.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    /// The card exactly as the client sent it.
    pub card: Card,
    /// The identity the playing client claimed. Echoed without verification;
    /// the coordinator never cross-checks it against the sending session.
    pub player_id: SessionId,
    /// The turn pointer after advancing.
    pub current_turn_index: usize,
}

/// Owns every room and implements the join / play / disconnect transitions.
///
/// This is a plain value with no interior mutability and no I/O. The gateway
/// holds it behind a mutex and calls one transition per inbound event, so
/// each read-modify-write runs to completion before the next event touches
/// the same state.
///
/// There are no error returns anywhere here. Unknown rooms make `play_card`
/// a silent no-op, unknown sessions make `disconnect` a silent no-op, and
/// join accepts any opaque input. Bad client data must never take the
/// process down.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: HashMap<RoomId, Room>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Adds a session to a room, creating the room if this is the first
    /// join to that name. Joining a room you are already in changes nothing
    /// (no duplicate entry, no state reset).
    ///
    /// Returns the room's roster after the join, in join order. The caller
    /// broadcasts it to every session in the room.
    pub fn join(
        &mut self,
        room_id: RoomId,
        session_id: SessionId,
        display_name: &str,
    ) -> &[Player] {
        let room = self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!(%room_id, "room created");
            Room::new()
        });

        if room.add_player(session_id.clone(), display_name) {
            tracing::info!(
                %room_id,
                %session_id,
                name = display_name,
                players = room.players().len(),
                "player joined"
            );
        } else {
            tracing::debug!(%room_id, %session_id, "repeat join ignored");
        }

        room.players()
    }

    /// Records a card play in a room: the card becomes the room's top card
    /// and the turn pointer advances by one, wrapping around the roster.
    ///
    /// Returns `None` without touching anything when the room does not
    /// exist or its roster is empty. No turn or legality check is made:
    /// any session may play any card at any time, and `player_id` is
    /// whatever identity the client claimed.
    pub fn play_card(
        &mut self,
        room_id: &RoomId,
        player_id: SessionId,
        card: Card,
    ) -> Option<TurnResult> {
        let Some(room) = self.rooms.get_mut(room_id) else {
            tracing::debug!(%room_id, "play on unknown room ignored");
            return None;
        };

        let Some(current_turn_index) = room.record_play(card.clone()) else {
            tracing::debug!(%room_id, "play on empty room ignored");
            return None;
        };

        tracing::info!(
            %room_id,
            %player_id,
            current_turn_index,
            "card played"
        );

        Some(TurnResult {
            card,
            player_id,
            current_turn_index,
        })
    }

    /// Removes a session from every room that contains it.
    ///
    /// Returns the `(room, updated roster)` pairs that actually changed,
    /// each to be broadcast to that room's remaining members. Rooms the
    /// session never joined are untouched and absent from the result.
    /// Rooms left empty are retained in the registry indefinitely.
    ///
    /// The turn pointer of affected rooms is NOT re-clamped; it may end up
    /// past the shrunk roster or pointing at a different player than
    /// intended. Deployed clients tolerate the stale pointer, so re-clamping
    /// here would change the broadcast contract.
    pub fn disconnect(&mut self, session_id: &SessionId) -> Vec<(RoomId, Vec<Player>)> {
        let mut changed = Vec::new();

        for (room_id, room) in &mut self.rooms {
            if room.remove_player(session_id) {
                tracing::info!(
                    %room_id,
                    %session_id,
                    players = room.players().len(),
                    "player removed on disconnect"
                );
                changed.push((room_id.clone(), room.players().to_vec()));
            }
        }

        changed
    }

    /// Looks up a room by name.
    pub fn room(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// The number of rooms ever created (empty rooms included, since
    /// nothing evicts them).
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All room names currently in the registry.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys().cloned().collect()
    }
}
