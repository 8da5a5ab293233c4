//! Room coordination for the cardroom server.
//!
//! This crate is the server's entire brain: an in-memory [`Registry`] of
//! named rooms and the three transitions that mutate it (join, play card,
//! disconnect). It performs no I/O and knows nothing about connections;
//! the gateway layer feeds it decoded events and broadcasts whatever it
//! returns.
//!
//! # Key types
//!
//! - [`Registry`] — owns every room, implements the transitions
//! - [`Room`] — roster, turn pointer, top card
//! - [`TurnResult`] — the broadcastable outcome of a play

mod registry;
mod room;

pub use registry::{Registry, TurnResult};
pub use room::Room;
