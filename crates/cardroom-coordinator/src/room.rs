//! A single room: roster, turn pointer, and the last played card.

use cardroom_protocol::{Card, Player, SessionId};

/// One room's state.
///
/// A room has exactly two lifecycle states: it doesn't exist yet, or it is
/// live in the [`Registry`](crate::Registry). Creation happens lazily on the
/// first join; nothing ever destroys a room, so a room whose last player
/// left stays in memory with an empty roster.
///
/// Fields are private so the roster invariant (no two entries with the same
/// session id) can only be maintained in one place.
#[derive(Debug, Clone, Default)]
pub struct Room {
    /// Roster in join order. Insertion order is the broadcast order.
    players: Vec<Player>,
    /// Index into `players` of whose play is expected next. Advisory only:
    /// plays are never rejected for being out of turn.
    current_turn_index: usize,
    /// The most recently played card, if any.
    top_card: Option<Card>,
}

impl Room {
    /// Creates an empty room: no players, turn pointer at 0, no top card.
    pub fn new() -> Self {
        Self::default()
    }

    /// The roster, in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn is expected next.
    ///
    /// Meaningless while the roster is empty, and possibly stale after a
    /// departure (see [`Registry::disconnect`](crate::Registry::disconnect)).
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// The most recently played card.
    pub fn top_card(&self) -> Option<&Card> {
        self.top_card.as_ref()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether the given session has a roster entry here.
    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.players.iter().any(|p| p.id == *session_id)
    }

    /// Appends a player with an empty hand unless one with the same session
    /// id is already present. Returns whether the roster changed.
    pub(crate) fn add_player(&mut self, session_id: SessionId, name: &str) -> bool {
        if self.contains(&session_id) {
            return false;
        }
        self.players.push(Player::new(session_id, name));
        true
    }

    /// Removes the player for the given session, if present. Returns whether
    /// the roster changed.
    ///
    /// The turn pointer is deliberately left alone: after a removal it may
    /// point past the end of the roster or at a different player than
    /// before. See [`Registry::disconnect`](crate::Registry::disconnect).
    pub(crate) fn remove_player(&mut self, session_id: &SessionId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != *session_id);
        self.players.len() != before
    }

    /// Records a play: stores the card as the new top card and advances the
    /// turn pointer, wrapping around the roster.
    ///
    /// Returns the new turn index, or `None` when the roster is empty (the
    /// advance would be a modulo by zero, so a play against an empty room is
    /// a no-op).
    pub(crate) fn record_play(&mut self, card: Card) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }
        self.top_card = Some(card);
        self.current_turn_index = (self.current_turn_index + 1) % self.players.len();
        Some(self.current_turn_index)
    }
}
