//! Catalog API response types and their conversion into library drafts.

use crate::models::{BookDraft, ReadingStatus};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A search hit or volume lookup, flattened from the catalog's nested shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogVolume {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub published_date: String,
    pub page_count: u32,
    pub categories: Vec<String>,
    pub thumbnail: String,
}

impl CatalogVolume {
    /// Publication year, or the raw date when it doesn't start with one.
    pub fn year(&self) -> &str {
        match self.published_date.get(..4) {
            Some(year) if year.chars().all(|c| c.is_ascii_digit()) => year,
            _ => &self.published_date,
        }
    }
}

impl From<CatalogVolume> for BookDraft {
    fn from(volume: CatalogVolume) -> Self {
        BookDraft {
            id: volume.id,
            title: Some(volume.title),
            authors: Some(volume.authors),
            published_date: Some(volume.published_date),
            page_count: Some(i64::from(volume.page_count)),
            categories: Some(volume.categories),
            thumbnail: Some(volume.thumbnail),
            status: Some(ReadingStatus::Planned.as_str().to_string()),
            ..Default::default()
        }
    }
}

/// Response body of the volumes search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<VolumeItem>>,
}

impl VolumesResponse {
    pub(crate) fn into_volumes(self) -> Vec<CatalogVolume> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .filter_map(VolumeItem::into_volume)
            .collect()
    }
}

/// One volume as returned by the API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

impl VolumeItem {
    /// Drops items without an id; they can't be keyed in the library.
    pub(crate) fn into_volume(self) -> Option<CatalogVolume> {
        let Some(id) = self.id.filter(|id| !id.trim().is_empty()) else {
            warn!("Skipping catalog item without an id");
            return None;
        };
        let info = self.volume_info.unwrap_or_default();

        Some(CatalogVolume {
            id,
            title: info.title.unwrap_or_default(),
            authors: info.authors.unwrap_or_default(),
            published_date: info.published_date.unwrap_or_default(),
            page_count: info
                .page_count
                .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
                .unwrap_or(0),
            categories: info.categories.unwrap_or_default(),
            thumbnail: info
                .image_links
                .and_then(|links| links.thumbnail)
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub page_count: Option<i64>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}
