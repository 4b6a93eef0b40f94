//! Library commands: list, update, delete.
//!
//! Filtering and sorting happen here on the loaded collection; the store
//! itself only hands back everything it has.

use super::{error, info, print_table, warn};
use anyhow::Result;
use clap::ValueEnum;
use readify_core::{Book, BookUpdate, LibraryStore, ReadingStatus};

/// Ordering for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Case-insensitive title
    Title,
    /// Date added, oldest first
    Added,
    /// Rating, lowest first; unrated books last
    Rating,
}

pub fn list(
    store: &LibraryStore,
    status: Option<ReadingStatus>,
    sort: SortKey,
    text: Option<&str>,
) -> Result<()> {
    let books = select_books(store.load()?, status, text, sort);
    if books.is_empty() {
        println!("No books yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.title.clone(),
                b.authors.join(", "),
                b.status.to_string(),
                b.rating.map(|r| r.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["id", "title", "authors", "status", "rating"], &rows);
    Ok(())
}

pub fn update(
    store: &LibraryStore,
    id: &str,
    status: Option<ReadingStatus>,
    rating: Option<i64>,
    notes: Option<String>,
) -> Result<()> {
    let update = BookUpdate {
        status,
        rating,
        notes,
    };
    if update.is_empty() {
        warn("Nothing to update: pass --status, --rating or --notes.");
        return Ok(());
    }

    match store.update_book(id, update)? {
        Some(_) => info("Updated."),
        None => error("Book not found."),
    }
    Ok(())
}

pub fn delete(store: &LibraryStore, id: &str) -> Result<()> {
    let title = store.get_by_id(id)?.map(|b| b.title);
    if store.delete_book(id)? {
        info(&format!("Deleted: {}", title.unwrap_or_else(|| id.to_string())));
    } else {
        error("Book not found.");
    }
    Ok(())
}

/// Apply the status filter, the text filter and the sort order.
pub fn select_books(
    books: Vec<Book>,
    status: Option<ReadingStatus>,
    text: Option<&str>,
    sort: SortKey,
) -> Vec<Book> {
    let needle = text
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut selected: Vec<Book> = books
        .into_iter()
        .filter(|b| status.map_or(true, |s| b.status == s))
        .filter(|b| match &needle {
            Some(needle) => {
                b.title.to_lowercase().contains(needle)
                    || b.authors.iter().any(|a| a.to_lowercase().contains(needle))
            }
            None => true,
        })
        .collect();

    match sort {
        SortKey::Title => selected.sort_by_key(|b| b.title.to_lowercase()),
        SortKey::Added => selected.sort_by(|a, b| a.added_at.cmp(&b.added_at)),
        SortKey::Rating => selected.sort_by_key(|b| (b.rating.is_none(), b.rating)),
    }
    selected
}
