use serde::{Deserialize, Serialize};

/// Represents a single video with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video (case-sensitive key)
    pub id: String,

    /// Video title, used for display sorting and title search
    pub title: String,

    /// Tags attached to the video (matched case-insensitively)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Moderation flag reason; `None` means the video is allowed.
    /// Only the controller's flag/allow operations mutate this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether a moderation flag is currently attached
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
