//! Core protocol types for the cardroom wire format.
//!
//! Every type in this module travels on the wire: these are the structures
//! that get serialized to JSON, sent over the WebSocket, and parsed on the
//! other side. Clients for this server already exist, so the JSON shapes
//! here are load-bearing: field names, casing, and tag layout are pinned by
//! the tests at the bottom of the file.
//!
//! The wire format is a flat two-field object:
//!
//! ```text
//! { "event": "join_room", "data": { "roomId": "R1", "playerName": "Alice" } }
//! ```
//!
//! which maps onto adjacently tagged serde enums ([`ClientEvent`] and
//! [`ServerEvent`]) with `tag = "event"` and `content = "data"`.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for one live connection.
///
/// Issued by the gateway when a client connects, echoed back to the client
/// in `connection_success`, and used as the player id in room rosters. The
/// value is an opaque random token; nothing in the server interprets it.
///
/// This is a newtype wrapper around `String` rather than a bare string:
/// a `SessionId` cannot be passed where a `RoomId` is expected, and function
/// signatures say what they mean.
///
/// `#[serde(transparent)]` makes it serialize as the inner string, so a
/// session id appears on the wire as `"k3J9x..."`, not `{ "0": "k3J9x..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A client-chosen name for a room.
///
/// Rooms are identified by whatever string the client sends in `join_room`;
/// the server never parses or validates it. Same newtype pattern as
/// [`SessionId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Wraps a room name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the room name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A card value as supplied by a client.
///
/// The server never inspects a card's structure. A card can be
/// `{ "color": "red", "value": 7 }`, a bare string, a number, anything the
/// client's game understands. `serde_json::Value` carries it through
/// untouched, which is the whole contract: legality, deck composition, and
/// scoring are client concerns.
pub type Card = serde_json::Value;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One entry in a room's roster.
///
/// Serialized exactly as the client expects it inside `update_players`:
/// `{ "id": ..., "name": ..., "hand": [...] }`. The `hand` is client-trusted
/// data; the server initializes it empty and never touches it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// The session that owns this roster entry.
    pub id: SessionId,

    /// Display name, taken verbatim from the `join_room` payload.
    pub name: String,

    /// Ordered card values. Opaque to the server.
    ///
    /// `#[serde(default)]` lets a roster entry without a `hand` field
    /// deserialize to an empty hand instead of failing.
    #[serde(default)]
    pub hand: Vec<Card>,
}

impl Player {
    /// Creates a roster entry with an empty hand.
    pub fn new(id: SessionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an outbound event?
// ---------------------------------------------------------------------------

/// The audience for an outbound event.
///
/// Gateway handlers produce `(Recipient, ServerEvent)` pairs; the delivery
/// step resolves `Room` to every session currently on that room's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// One specific session.
    Session(SessionId),

    /// Every session in the room.
    Room(RoomId),
}

// ---------------------------------------------------------------------------
// ClientEvent — inbound wire events
// ---------------------------------------------------------------------------

/// Events a client may send.
///
/// `#[serde(tag = "event", content = "data")]` produces the adjacently
/// tagged layout the clients speak:
///
/// ```text
/// { "event": "play_card",
///   "data": { "roomId": "R1", "card": {...}, "playerId": "abc" } }
/// ```
///
/// `rename_all = "snake_case"` turns the variant names into the event
/// strings (`JoinRoom` → `"join_room"`). Field names are camelCase on the
/// wire, so each field carries an explicit rename.
///
/// Anything that fails to parse into this enum is a malformed message and is
/// rejected at the gateway boundary (logged and dropped, never crashes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Join a room, creating it if it does not exist yet.
    JoinRoom {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        #[serde(rename = "playerName")]
        player_name: String,
    },

    /// Record a card play and advance the turn pointer.
    ///
    /// `player_id` is the identity the client *claims*; the server passes
    /// it through without checking it against the sending session. A
    /// documented trust boundary, not an oversight.
    PlayCard {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        card: Card,
        #[serde(rename = "playerId")]
        player_id: SessionId,
    },
}

// ---------------------------------------------------------------------------
// ServerEvent — outbound wire events
// ---------------------------------------------------------------------------

/// Events the server sends.
///
/// Same adjacently tagged layout as [`ClientEvent`]. `UpdatePlayers` is a
/// newtype variant, so its `data` is the roster array itself rather than a
/// wrapping object: `{ "event": "update_players", "data": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// One-time greeting to a newly connected session, carrying the id the
    /// gateway assigned to it. Sent to that session only.
    ConnectionSuccess {
        message: String,
        #[serde(rename = "socketId")]
        socket_id: SessionId,
    },

    /// The full roster of a room, in join order. Broadcast to the room
    /// after every membership change.
    UpdatePlayers(Vec<Player>),

    /// A card was played. Broadcast to the room.
    CardPlayed {
        card: Card,
        #[serde(rename = "playerId")]
        player_id: SessionId,
        #[serde(rename = "currentTurnIndex")]
        current_turn_index: usize,
    },
}

// =========================================================================
// Tests
// =========================================================================
