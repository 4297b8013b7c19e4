use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named, ordered, deduplicated collection of video references
///
/// Videos are referenced by id; the owning library resolves them for
/// display. Insertion order is the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, with the case it was originally created with
    pub name: String,

    /// Ordered video ids; each id appears at most once
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Append a video id. Returns false without mutating if the id is
    /// already present.
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video id. Returns false if it was not present.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(pos) => {
                self.video_ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove all videos. Idempotent.
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Whether the given video id is in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Video ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

/// Name-indexed playlist collection with case-insensitive uniqueness
///
/// The lookup key is the lowercased name; the stored playlist keeps
/// the original-case name for display.
#[derive(Debug, Clone, Default)]
pub struct PlaylistLibrary {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistLibrary {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist. Returns false without mutating if a
    /// playlist with the same name already exists case-insensitively.
    pub fn create(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        if self.playlists.contains_key(&key) {
            return false;
        }
        self.playlists.insert(key, Playlist::new(name.to_string()));
        true
    }

    /// Delete a playlist. Returns false if no case-insensitive match.
    pub fn delete(&mut self, name: &str) -> bool {
        self.playlists.remove(&name.to_lowercase()).is_some()
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Case-insensitive mutable lookup
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&name.to_lowercase())
    }

    /// All playlists, in no particular order (caller sorts for display)
    pub fn all(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
