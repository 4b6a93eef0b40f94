//! `export` command: the raw collection as CSV.

use super::{info, warn};
use anyhow::{Context, Result};
use readify_core::{Book, LibraryStore};
use std::path::Path;
use tracing::debug;

const CSV_HEADER: [&str; 11] = [
    "id",
    "title",
    "authors",
    "published_date",
    "page_count",
    "categories",
    "thumbnail",
    "added_at",
    "status",
    "rating",
    "notes",
];

/// Separator used when flattening list fields into one cell.
const LIST_SEPARATOR: &str = "; ";

pub fn export(store: &LibraryStore, csv_path: &Path) -> Result<()> {
    let books = store.load()?;
    if books.is_empty() {
        warn("Library empty.");
        return Ok(());
    }

    write_csv(&books, csv_path)?;
    info(&format!("Exported to {}", csv_path.display()));
    Ok(())
}

pub fn write_csv(books: &[Book], csv_path: &Path) -> Result<()> {
    if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;
    writer.write_record(CSV_HEADER)?;
    for book in books {
        writer.write_record(csv_row(book))?;
    }
    writer.flush()?;

    debug!("Wrote {} rows to {}", books.len(), csv_path.display());
    Ok(())
}

fn csv_row(book: &Book) -> [String; 11] {
    [
        book.id.clone(),
        book.title.clone(),
        book.authors.join(LIST_SEPARATOR),
        book.published_date.clone(),
        book.page_count.to_string(),
        book.categories.join(LIST_SEPARATOR),
        book.thumbnail.clone(),
        book.added_at.clone(),
        book.status.to_string(),
        book.rating.map(|r| r.to_string()).unwrap_or_default(),
        book.notes.clone(),
    ]
}
