//! Data model for the video catalog
//!
//! This module defines the video record, the id-keyed video library
//! and the name-keyed playlist collection.

mod video;
mod library;
mod playlist;

pub use video::Video;
pub use library::VideoLibrary;
pub use playlist::{Playlist, PlaylistLibrary};
