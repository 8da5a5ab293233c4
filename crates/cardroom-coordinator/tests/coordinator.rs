//! Integration tests for the registry transitions.
//!
//! These exercise the coordinator exactly the way the gateway drives it:
//! one transition per inbound event, asserting the returned snapshots that
//! would be broadcast.

use cardroom_coordinator::Registry;
use cardroom_protocol::{RoomId, SessionId};
use serde_json::json;

fn rid(s: &str) -> RoomId {
    RoomId::new(s)
}

fn sid(s: &str) -> SessionId {
    SessionId::new(s)
}

// =========================================================================
// Join
// =========================================================================

#[test]
fn test_first_join_creates_the_room() {
    let mut registry = Registry::new();
    assert_eq!(registry.room_count(), 0);

    let roster = registry.join(rid("R1"), sid("a"), "Alice");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, sid("a"));
    assert_eq!(roster[0].name, "Alice");
    assert!(roster[0].hand.is_empty());
    assert_eq!(registry.room_count(), 1);

    let room = registry.room(&rid("R1")).unwrap();
    assert_eq!(room.current_turn_index(), 0);
    assert!(room.top_card().is_none());
}

#[test]
fn test_repeat_join_is_idempotent() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    let roster = registry.join(rid("R1"), sid("a"), "Alice");

    assert_eq!(roster.len(), 1, "same session must not appear twice");
}

#[test]
fn test_repeat_join_does_not_reset_room_state() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.join(rid("R1"), sid("b"), "Bob");
    registry.play_card(&rid("R1"), sid("a"), json!("seven"));

    // Alice joins again; the turn pointer and top card survive.
    registry.join(rid("R1"), sid("a"), "Alice");
    let room = registry.room(&rid("R1")).unwrap();
    assert_eq!(room.current_turn_index(), 1);
    assert_eq!(room.top_card().unwrap(), &json!("seven"));
}

#[test]
fn test_roster_reflects_join_order() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.join(rid("R1"), sid("b"), "Bob");
    let roster = registry.join(rid("R1"), sid("c"), "Carol");

    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_same_session_may_join_several_rooms() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.join(rid("R2"), sid("a"), "Alice");

    assert!(registry.room(&rid("R1")).unwrap().contains(&sid("a")));
    assert!(registry.room(&rid("R2")).unwrap().contains(&sid("a")));
}

#[test]
fn test_join_accepts_opaque_names() {
    // Room names and display names are opaque strings; nothing is
    // validated or normalized.
    let mut registry = Registry::new();
    let roster = registry.join(rid(""), sid("a"), "");
    assert_eq!(roster[0].name, "");
    assert!(registry.room(&rid("")).is_some());
}

// =========================================================================
// Play
// =========================================================================

#[test]
fn test_turn_advances_and_wraps() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.join(rid("R1"), sid("b"), "Bob");
    registry.join(rid("R1"), sid("c"), "Carol");

    // With 3 players, consecutive plays yield indices 1, 2, 0.
    let indices: Vec<usize> = (0..3)
        .map(|i| {
            registry
                .play_card(&rid("R1"), sid("a"), json!(i))
                .unwrap()
                .current_turn_index
        })
        .collect();
    assert_eq!(indices, [1, 2, 0]);
}

#[test]
fn test_play_overwrites_top_card() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");

    registry.play_card(&rid("R1"), sid("a"), json!({ "value": 1 }));
    registry.play_card(&rid("R1"), sid("a"), json!({ "value": 2 }));

    let top = registry.room(&rid("R1")).unwrap().top_card().unwrap();
    assert_eq!(top["value"], 2);
}

#[test]
fn test_play_echoes_claimed_player_id() {
    // The coordinator trusts the payload identity entirely: a session that
    // never joined the room can claim to be anyone, and the result carries
    // the claim through untouched.
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");

    let result = registry
        .play_card(&rid("R1"), sid("impostor"), json!("card"))
        .unwrap();
    assert_eq!(result.player_id, sid("impostor"));
}

#[test]
fn test_play_on_unknown_room_is_a_silent_noop() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");

    let result = registry.play_card(&rid("nope"), sid("a"), json!("card"));

    assert!(result.is_none());
    assert_eq!(registry.room_count(), 1, "no room may be created by a play");
    let room = registry.room(&rid("R1")).unwrap();
    assert_eq!(room.current_turn_index(), 0);
    assert!(room.top_card().is_none());
}

#[test]
fn test_play_on_empty_room_is_a_silent_noop() {
    // A room whose last player left is retained with an empty roster.
    // Playing into it must not panic and must not produce a result.
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.disconnect(&sid("a"));

    let result = registry.play_card(&rid("R1"), sid("a"), json!("card"));

    assert!(result.is_none());
    let room = registry.room(&rid("R1")).unwrap();
    assert!(room.top_card().is_none());
    assert_eq!(room.current_turn_index(), 0);
}

// =========================================================================
// Disconnect
// =========================================================================

#[test]
fn test_disconnect_removes_session_from_all_its_rooms() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.join(rid("R1"), sid("b"), "Bob");
    registry.join(rid("R2"), sid("a"), "Alice");
    registry.join(rid("R3"), sid("b"), "Bob");

    let mut changed = registry.disconnect(&sid("a"));
    changed.sort_by(|(x, _), (y, _)| x.as_str().cmp(y.as_str()));

    // Only the rooms Alice was in report a change, R3 stays silent.
    let ids: Vec<&str> = changed.iter().map(|(r, _)| r.as_str()).collect();
    assert_eq!(ids, ["R1", "R2"]);

    let (_, r1_roster) = &changed[0];
    assert_eq!(r1_roster.len(), 1);
    assert_eq!(r1_roster[0].id, sid("b"));
    let (_, r2_roster) = &changed[1];
    assert!(r2_roster.is_empty());

    assert!(!registry.room(&rid("R1")).unwrap().contains(&sid("a")));
    assert!(!registry.room(&rid("R2")).unwrap().contains(&sid("a")));
    assert!(registry.room(&rid("R3")).unwrap().contains(&sid("b")));
}

#[test]
fn test_disconnect_of_unknown_session_changes_nothing() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");

    let changed = registry.disconnect(&sid("ghost"));

    assert!(changed.is_empty());
    assert_eq!(registry.room(&rid("R1")).unwrap().players().len(), 1);
}

#[test]
fn test_emptied_room_is_retained() {
    let mut registry = Registry::new();
    registry.join(rid("R1"), sid("a"), "Alice");
    registry.disconnect(&sid("a"));

    assert_eq!(registry.room_count(), 1);
    assert!(registry.room(&rid("R1")).unwrap().is_empty());
    assert_eq!(registry.room_ids(), vec![rid("R1")]);
}

// =========================================================================
// The documented end-to-end scenario
// =========================================================================

#[test]
fn test_alice_bob_scenario() {
    let mut registry = Registry::new();

    // Alice joins R1: roster [Alice], turn index 0.
    let roster = registry.join(rid("R1"), sid("A"), "Alice");
    assert_eq!(roster.len(), 1);
    assert_eq!(registry.room(&rid("R1")).unwrap().current_turn_index(), 0);

    // Bob joins: roster [Alice, Bob].
    let roster = registry.join(rid("R1"), sid("B"), "Bob");
    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);

    // Alice plays red 7: broadcast carries the card, her id, and index 1.
    let result = registry
        .play_card(&rid("R1"), sid("A"), json!({ "color": "red", "value": 7 }))
        .unwrap();
    assert_eq!(result.card["color"], "red");
    assert_eq!(result.card["value"], 7);
    assert_eq!(result.player_id, sid("A"));
    assert_eq!(result.current_turn_index, 1);

    // Bob disconnects: roster back to [Alice], and the turn index is STILL
    // 1 even though only one player remains. The stale pointer is part of
    // the broadcast contract, not something disconnect repairs.
    let changed = registry.disconnect(&sid("B"));
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].0, rid("R1"));
    assert_eq!(changed[0].1.len(), 1);
    assert_eq!(changed[0].1[0].name, "Alice");
    assert_eq!(registry.room(&rid("R1")).unwrap().current_turn_index(), 1);
}
