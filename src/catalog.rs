//! Catalog loading
//!
//! The video library is populated once, at startup, from a JSON file
//! holding an array of `{ id, title, tags }` records. Moderation flags
//! always start absent; they only ever come from the flag command.

use crate::model::{Video, VideoLibrary};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Built-in demo catalog, used when no catalog file is given
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Load a video library from a JSON catalog file
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {path:?}"))?;
    let library = parse_catalog(&raw)
        .with_context(|| format!("Failed to parse catalog file {path:?}"))?;
    log::info!("Catalog loaded: {} videos", library.len());
    Ok(library)
}

/// The embedded demo catalog
pub fn sample_catalog() -> Result<VideoLibrary> {
    parse_catalog(SAMPLE_CATALOG).context("Built-in sample catalog is invalid")
}

fn parse_catalog(raw: &str) -> Result<VideoLibrary> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(raw).context("Catalog must be a JSON array of video records")?;

    let mut library = VideoLibrary::new();
    for entry in entries {
        if library.get(&entry.id).is_some() {
            bail!("Duplicate video id in catalog: {}", entry.id);
        }
        library.add_video(Video::new(entry.id, entry.title, entry.tags));
    }
    Ok(library)
}
