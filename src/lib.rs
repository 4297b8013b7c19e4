//! Videodeck - in-memory video catalog and playback simulator
//!
//! This library models a video catalog, user-defined playlists and a
//! single playback session with play/pause/stop semantics. All state
//! lives in memory and is owned by one [`Controller`] instance.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod interact;
pub mod model;
pub mod repl;
pub mod session;

pub use controller::Controller;
pub use error::CommandError;
