//! Record model for library entries.

mod book;
mod status;

pub use book::{
    clamp_rating, format_timestamp, normalize, normalize_at, Book, BookDraft, RATING_MAX,
    RATING_MIN,
};
pub use status::ReadingStatus;
