//! Painting data feed: a JSON array of
//! `{Image, Name, Description, Video?, Data?}` records.
//!
//! Parsing never fails the whole load. A body that is not a JSON array yields
//! no records; individual entries that do not match the record shape become
//! placeholders.

use crate::constants::PLACEHOLDER_DESCRIPTION;
use crate::store::PaintingMetadata;
use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PaintingRecord {
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Video", default)]
    pub video: Option<String>,
    #[serde(rename = "Data", default)]
    pub data: Option<String>,
}

/// One feed slot: either a well-formed record or a malformed entry.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedEntry {
    Record(PaintingRecord),
    Malformed,
}

impl FeedEntry {
    /// Image URL to load, if any.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            FeedEntry::Record(r) => r.image.as_deref().filter(|s| !s.trim().is_empty()),
            FeedEntry::Malformed => None,
        }
    }
}

/// Parse the feed body, logging (and returning nothing) on failure.
pub fn parse_feed(body: &str) -> Vec<FeedEntry> {
    match try_parse_feed(body) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("[feed] unable to parse painting data: {:#}", e);
            Vec::new()
        }
    }
}

pub fn try_parse_feed(body: &str) -> anyhow::Result<Vec<FeedEntry>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(body).context("feed is not a JSON array")?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(i, v)| match serde_json::from_value::<PaintingRecord>(v) {
            Ok(r) => FeedEntry::Record(r),
            Err(e) => {
                log::warn!("[feed] entry {} is malformed: {}", i, e);
                FeedEntry::Malformed
            }
        })
        .collect())
}

/// Metadata for a painting whose image loaded.
pub fn record_metadata(record: &PaintingRecord, index: usize) -> PaintingMetadata {
    PaintingMetadata {
        name: non_empty(record.name.as_deref()).unwrap_or_else(|| format!("Painting {}", index + 1)),
        description: record.description.clone().unwrap_or_default(),
        video_link: non_empty(record.video.as_deref()),
        data_link: non_empty(record.data.as_deref()),
        is_placeholder: false,
        is_custom_upload: false,
    }
}

/// Metadata for a slot whose image is missing or failed to load.
pub fn placeholder_metadata(entry: &FeedEntry, index: usize) -> PaintingMetadata {
    let record = match entry {
        FeedEntry::Record(r) => Some(r),
        FeedEntry::Malformed => None,
    };
    PaintingMetadata {
        name: record
            .and_then(|r| non_empty(r.name.as_deref()))
            .unwrap_or_else(|| format!("Placeholder {}", index + 1)),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        video_link: record.and_then(|r| non_empty(r.video.as_deref())),
        data_link: record.and_then(|r| non_empty(r.data.as_deref())),
        is_placeholder: true,
        is_custom_upload: false,
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
