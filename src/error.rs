//! Failure taxonomy for the command surface
//!
//! Every command failure is expected and recoverable, and maps to one
//! specific variant here so the presentation layer can render a stable
//! message and tests can match on the reason.

use thiserror::Error;

/// Reason a command could not be carried out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("video does not exist: {0}")]
    VideoNotFound(String),

    #[error("playlist does not exist: {0}")]
    PlaylistNotFound(String),

    #[error("a playlist with the same name already exists: {0}")]
    PlaylistAlreadyExists(String),

    #[error("video is currently flagged for being {reason}")]
    VideoFlagged { id: String, reason: String },

    #[error("video is already in this playlist")]
    VideoAlreadyInPlaylist,

    #[error("video is not in this playlist")]
    VideoNotInPlaylist,

    #[error("no video is currently being played")]
    NothingPlaying,

    #[error("video is already paused")]
    AlreadyPaused,

    #[error("video is already playing")]
    AlreadyPlaying,

    #[error("no video is currently being played")]
    NothingToStop,

    #[error("video is already flagged")]
    AlreadyFlagged,

    #[error("video is not currently flagged")]
    NotFlagged,

    #[error("no available videos")]
    NoAvailableVideos,

    #[error("no results match search for {0}")]
    NoSearchResults(String),
}
