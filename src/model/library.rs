use super::Video;
use std::collections::HashMap;

/// Read-mostly lookup surface over the set of video records
///
/// Videos are indexed by id; ids are unique. Videos are created once
/// at load time and never deleted.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library, replacing any previous entry with
    /// the same id
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    /// Get a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Mutable lookup, used by the flag/allow operations
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// All videos, in no particular order
    pub fn all(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// All videos without a moderation flag, in no particular order.
    /// Search and random play draw from this set only.
    pub fn all_unflagged(&self) -> impl Iterator<Item = &Video> {
        self.videos.values().filter(|v| !v.is_flagged())
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the library holds no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}
