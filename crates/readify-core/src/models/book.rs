//! Library record shape and the normalization applied before persistence.

use super::status::ReadingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lowest and highest accepted star rating.
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// One entry in the library, as persisted.
///
/// Every `Book` produced by [`normalize`] satisfies the record invariants:
/// a valid status, a rating within `RATING_MIN..=RATING_MAX` when present, and
/// an `added_at` that is set once and then carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(default, deserialize_with = "non_negative_count")]
    pub page_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_at: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: ReadingStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "clamped_rating"
    )]
    pub rating: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

/// Partially-populated record: catalog data or an edited row.
///
/// Fields are loosely typed on purpose (`status` is free text, `rating` and
/// `page_count` are signed) so that [`normalize`] can coerce bad input instead
/// of rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub id: String,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub page_count: Option<i64>,
    pub categories: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub added_at: Option<String>,
    pub status: Option<String>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

impl BookDraft {
    /// Empty draft for the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// True when the draft carries a usable creation timestamp.
    pub fn has_added_at(&self) -> bool {
        self.added_at
            .as_deref()
            .map(|ts| !ts.trim().is_empty())
            .unwrap_or(false)
    }
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: Some(book.title),
            authors: Some(book.authors),
            published_date: Some(book.published_date),
            page_count: Some(i64::from(book.page_count)),
            categories: Some(book.categories),
            thumbnail: Some(book.thumbnail),
            added_at: Some(book.added_at),
            status: Some(book.status.as_str().to_string()),
            rating: book.rating.map(i64::from),
            notes: Some(book.notes),
        }
    }
}

/// Produce a fully-populated record from raw input. Never fails.
///
/// Missing lists become empty, missing or unknown status becomes `planned`,
/// ratings are clamped into range and `added_at` is stamped with the current
/// UTC time only if the draft does not already carry one.
pub fn normalize(raw: BookDraft) -> Book {
    normalize_at(raw, Utc::now())
}

/// [`normalize`] with an explicit clock, used when stamping `added_at`.
pub fn normalize_at(raw: BookDraft, now: DateTime<Utc>) -> Book {
    let added_at = if raw.has_added_at() {
        raw.added_at.unwrap_or_default()
    } else {
        format_timestamp(now)
    };

    Book {
        id: raw.id,
        title: raw.title.unwrap_or_default(),
        authors: raw.authors.unwrap_or_default(),
        published_date: raw.published_date.unwrap_or_default(),
        page_count: clamp_page_count(raw.page_count.unwrap_or(0)),
        categories: raw.categories.unwrap_or_default(),
        thumbnail: raw.thumbnail.unwrap_or_default(),
        added_at,
        status: raw
            .status
            .as_deref()
            .map(ReadingStatus::parse_lenient)
            .unwrap_or_default(),
        rating: raw.rating.map(clamp_rating),
        notes: raw.notes.unwrap_or_default(),
    }
}

/// ISO-8601 UTC at seconds precision with a trailing `Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Clamp any integer into the accepted rating range.
pub fn clamp_rating(value: i64) -> u8 {
    // Range is tiny, the cast cannot truncate after clamping.
    value.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX)) as u8
}

fn clamp_page_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_negative_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?
        .map(clamp_page_count)
        .unwrap_or(0))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<ReadingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| ReadingStatus::parse_lenient(&s))
        .unwrap_or_default())
}

fn clamped_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.map(clamp_rating))
}
