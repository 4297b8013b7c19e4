//! Playback session state machine
//!
//! Tracks at most one active video and its pause state. The session
//! stores the video id only; the record itself stays in the library,
//! so moderation-flag changes are visible the moment the id is
//! resolved again.

use crate::error::CommandError;

/// The active playback entry: which video, and whether it is paused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayState {
    pub video_id: String,
    pub paused: bool,
}

/// Stopped / playing / paused state machine
///
/// `None` means stopped. Preconditions on the target video (exists,
/// unflagged) are enforced by the controller, not here.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    current: Option<PlayState>,
}

impl PlaybackSession {
    /// Create a session in the stopped state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to playing the given video from any state. Returns the
    /// id that was active before, if any (the implicit stop).
    pub fn play(&mut self, video_id: String) -> Option<String> {
        let previous = self.current.take().map(|s| s.video_id);
        self.current = Some(PlayState {
            video_id,
            paused: false,
        });
        previous
    }

    /// Stop playback, returning the entry that was active
    pub fn stop(&mut self) -> Result<PlayState, CommandError> {
        self.current.take().ok_or(CommandError::NothingToStop)
    }

    /// Pause the active video
    pub fn pause(&mut self) -> Result<&PlayState, CommandError> {
        let state = self.current.as_mut().ok_or(CommandError::NothingPlaying)?;
        if state.paused {
            return Err(CommandError::AlreadyPaused);
        }
        state.paused = true;
        Ok(state)
    }

    /// Resume the paused video
    pub fn resume(&mut self) -> Result<&PlayState, CommandError> {
        let state = self.current.as_mut().ok_or(CommandError::NothingPlaying)?;
        if !state.paused {
            return Err(CommandError::AlreadyPlaying);
        }
        state.paused = false;
        Ok(state)
    }

    /// The active entry, or `None` when stopped
    pub fn current(&self) -> Option<&PlayState> {
        self.current.as_ref()
    }
}
