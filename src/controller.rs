//! Command orchestration
//!
//! The controller owns all state (video library, playlists, playback
//! session) and maps each command to either a payload or a
//! [`CommandError`]. Every command validates fully before mutating;
//! the mutation is always the single final step, so a failed command
//! never leaves state half-changed. Existence checks come before
//! state checks.

use crate::error::CommandError;
use crate::interact::{RandomPicker, SelectionInput};
use crate::model::{PlaylistLibrary, Video, VideoLibrary};
use crate::session::PlaybackSession;

/// Payload of `now_playing`
#[derive(Debug, Clone)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// One row of `list_playlists`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub name: String,
    pub video_count: usize,
}

/// Payload of `show_playlist`: display name plus resolved videos in
/// insertion order (flagged entries included)
#[derive(Debug, Clone)]
pub struct PlaylistView {
    pub name: String,
    pub videos: Vec<Video>,
}

/// Payload of the search commands: the title-sorted result list and
/// the video that was played from it, if the user picked one
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<Video>,
    pub played: Option<Video>,
}

/// Payload of `flag`: the flagged video and whether flagging it
/// implicitly stopped the session
#[derive(Debug, Clone)]
pub struct Flagged {
    pub video: Video,
    pub stopped: bool,
}

/// Orchestrates the library, playlists and playback session in
/// response to commands
pub struct Controller<R: RandomPicker, S: SelectionInput> {
    videos: VideoLibrary,
    playlists: PlaylistLibrary,
    session: PlaybackSession,
    picker: R,
    selector: S,
}

impl<R: RandomPicker, S: SelectionInput> Controller<R, S> {
    /// Create a controller over an already-populated video library.
    /// The playlist collection starts empty and the session stopped.
    pub fn new(videos: VideoLibrary, picker: R, selector: S) -> Self {
        Self {
            videos,
            playlists: PlaylistLibrary::new(),
            session: PlaybackSession::new(),
            picker,
            selector,
        }
    }

    /// Number of videos in the library
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// All videos, sorted by title for display
    pub fn list_videos(&self) -> Vec<Video> {
        let mut videos: Vec<Video> = self.videos.all().cloned().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    /// Play a video by id, implicitly stopping whatever was active
    pub fn play(&mut self, video_id: &str) -> Result<Video, CommandError> {
        let video = self.lookup(video_id)?.clone();
        if let Some(reason) = &video.flag {
            return Err(CommandError::VideoFlagged {
                id: video.id.clone(),
                reason: reason.clone(),
            });
        }
        if let Some(previous) = self.session.play(video.id.clone()) {
            log::debug!("implicit stop of {previous} before playing {}", video.id);
        }
        Ok(video)
    }

    /// Stop the active video
    pub fn stop(&mut self) -> Result<Video, CommandError> {
        let state = self.session.stop()?;
        self.resolve(&state.video_id)
    }

    /// Play a uniformly drawn video from the unflagged set
    pub fn play_random(&mut self) -> Result<Video, CommandError> {
        let mut candidates: Vec<&Video> = self.videos.all_unflagged().collect();
        if candidates.is_empty() {
            return Err(CommandError::NoAvailableVideos);
        }
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        let id = candidates[self.picker.pick(candidates.len())].id.clone();
        self.play(&id)
    }

    /// Pause the active video
    pub fn pause(&mut self) -> Result<Video, CommandError> {
        let id = self.session.pause()?.video_id.clone();
        self.resolve(&id)
    }

    /// Resume the paused video
    pub fn resume(&mut self) -> Result<Video, CommandError> {
        let id = self.session.resume()?.video_id.clone();
        self.resolve(&id)
    }

    /// The active video and its pause state
    pub fn now_playing(&self) -> Result<NowPlaying, CommandError> {
        let state = self.session.current().ok_or(CommandError::NothingPlaying)?;
        Ok(NowPlaying {
            video: self.resolve(&state.video_id)?,
            paused: state.paused,
        })
    }

    /// Create an empty playlist with the given display name
    pub fn create_playlist(&mut self, name: &str) -> Result<(), CommandError> {
        if !self.playlists.create(name) {
            return Err(CommandError::PlaylistAlreadyExists(name.to_string()));
        }
        log::debug!("created playlist {name}");
        Ok(())
    }

    /// Delete a playlist by name (case-insensitive)
    pub fn delete_playlist(&mut self, name: &str) -> Result<(), CommandError> {
        if !self.playlists.delete(name) {
            return Err(CommandError::PlaylistNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Add a video to a playlist. Flagged videos cannot be newly added.
    pub fn add_to_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<Video, CommandError> {
        if self.playlists.get(playlist_name).is_none() {
            return Err(CommandError::PlaylistNotFound(playlist_name.to_string()));
        }
        let video = self.lookup(video_id)?.clone();
        if let Some(reason) = &video.flag {
            return Err(CommandError::VideoFlagged {
                id: video.id.clone(),
                reason: reason.clone(),
            });
        }
        let playlist = self
            .playlists
            .get_mut(playlist_name)
            .ok_or_else(|| CommandError::PlaylistNotFound(playlist_name.to_string()))?;
        if !playlist.add_video(&video.id) {
            return Err(CommandError::VideoAlreadyInPlaylist);
        }
        Ok(video)
    }

    /// Remove a video from a playlist. Works on flagged videos too.
    pub fn remove_from_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<Video, CommandError> {
        if self.playlists.get(playlist_name).is_none() {
            return Err(CommandError::PlaylistNotFound(playlist_name.to_string()));
        }
        let video = self.lookup(video_id)?.clone();
        let playlist = self
            .playlists
            .get_mut(playlist_name)
            .ok_or_else(|| CommandError::PlaylistNotFound(playlist_name.to_string()))?;
        if !playlist.remove_video(&video.id) {
            return Err(CommandError::VideoNotInPlaylist);
        }
        Ok(video)
    }

    /// Remove all videos from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), CommandError> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| CommandError::PlaylistNotFound(name.to_string()))?;
        playlist.clear();
        Ok(())
    }

    /// The playlist's display name and resolved videos in insertion
    /// order. Flagged videos already in the playlist stay visible.
    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView, CommandError> {
        let playlist = self
            .playlists
            .get(name)
            .ok_or_else(|| CommandError::PlaylistNotFound(name.to_string()))?;
        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.videos.get(id))
            .cloned()
            .collect();
        Ok(PlaylistView {
            name: playlist.name.clone(),
            videos,
        })
    }

    /// All playlists as (name, size) rows, sorted by display name
    pub fn list_playlists(&self) -> Vec<PlaylistSummary> {
        let mut summaries: Vec<PlaylistSummary> = self
            .playlists
            .all()
            .map(|p| PlaylistSummary {
                name: p.name.clone(),
                video_count: p.len(),
            })
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Search unflagged videos by case-insensitive title substring
    pub fn search_by_title(&mut self, term: &str) -> Result<SearchOutcome, CommandError> {
        self.search(term, |v| v.title_contains(term))
    }

    /// Search unflagged videos by case-insensitive exact tag match
    pub fn search_by_tag(&mut self, tag: &str) -> Result<SearchOutcome, CommandError> {
        self.search(tag, |v| v.has_tag(tag))
    }

    /// Attach a moderation flag. Flagging the active video stops it.
    pub fn flag(&mut self, video_id: &str, reason: &str) -> Result<Flagged, CommandError> {
        {
            let video = self.lookup(video_id)?;
            if video.is_flagged() {
                return Err(CommandError::AlreadyFlagged);
            }
        }
        let video = self
            .videos
            .get_mut(video_id)
            .ok_or_else(|| CommandError::VideoNotFound(video_id.to_string()))?;
        video.flag = Some(reason.to_string());
        let video = video.clone();
        log::info!("flagged {} for being {reason}", video.id);

        let is_current = self
            .session
            .current()
            .is_some_and(|state| state.video_id == video.id);
        let stopped = if is_current {
            self.session.stop()?;
            true
        } else {
            false
        };
        Ok(Flagged { video, stopped })
    }

    /// Clear a moderation flag. Never resumes playback.
    pub fn allow(&mut self, video_id: &str) -> Result<Video, CommandError> {
        {
            let video = self.lookup(video_id)?;
            if !video.is_flagged() {
                return Err(CommandError::NotFlagged);
            }
        }
        let video = self
            .videos
            .get_mut(video_id)
            .ok_or_else(|| CommandError::VideoNotFound(video_id.to_string()))?;
        video.flag = None;
        log::info!("flag removed from {}", video.id);
        Ok(video.clone())
    }

    fn search<F>(&mut self, term: &str, matches: F) -> Result<SearchOutcome, CommandError>
    where
        F: Fn(&Video) -> bool,
    {
        let mut results: Vec<Video> = self
            .videos
            .all_unflagged()
            .filter(|v| matches(v))
            .cloned()
            .collect();
        if results.is_empty() {
            return Err(CommandError::NoSearchResults(term.to_string()));
        }
        results.sort_by(|a, b| a.title.cmp(&b.title));

        // Results are pre-filtered to unflagged existing videos, so a
        // valid selection plays through the normal path without the
        // not-found/flagged cases arising.
        let played = match self.selector.request_selection(&results) {
            Some(n) if n >= 1 && n <= results.len() => Some(self.play(&results[n - 1].id)?),
            _ => None,
        };
        Ok(SearchOutcome { results, played })
    }

    fn lookup(&self, video_id: &str) -> Result<&Video, CommandError> {
        self.videos
            .get(video_id)
            .ok_or_else(|| CommandError::VideoNotFound(video_id.to_string()))
    }

    fn resolve(&self, video_id: &str) -> Result<Video, CommandError> {
        self.lookup(video_id).cloned()
    }
}
