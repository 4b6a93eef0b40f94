//! JSON-backed book collection keyed by id.
//!
//! Every operation is a fresh read-modify-write of the whole file; the store
//! keeps no state beyond its path. One writer per path is assumed: concurrent
//! processes race and the last full-file write wins.

use super::atomic::{read_json, write_json};
use crate::models::{normalize, Book, BookDraft, ReadingStatus};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Field edits applied by [`LibraryStore::update_book`].
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub status: Option<ReadingStatus>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

impl BookUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.rating.is_none() && self.notes.is_none()
    }
}

/// Handle over a single library file.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    /// Create a store for `path`. Nothing is touched on disk until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection.
    ///
    /// A missing file is bootstrapped to an empty array first, so this only
    /// fails on unreadable or malformed storage.
    pub fn load(&self) -> Result<Vec<Book>> {
        self.ensure_storage()?;
        let books: Vec<Book> = read_json(&self.path)?.unwrap_or_default();
        debug!("Loaded {} books from {}", books.len(), self.path.display());
        Ok(books)
    }

    /// Replace the stored collection.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        write_json(&self.path, books)?;
        debug!("Saved {} books to {}", books.len(), self.path.display());
        Ok(())
    }

    /// Insert or replace the record with the draft's id.
    ///
    /// An existing record's `added_at` always wins over the draft's, so edits
    /// never reset the creation time. Returns the record as stored.
    pub fn upsert_book(&self, draft: BookDraft) -> Result<Book> {
        let mut books = self.load()?;
        let existing = books.iter().position(|b| b.id == draft.id);

        let mut draft = draft;
        if let Some(index) = existing {
            let original = &books[index].added_at;
            if !original.trim().is_empty() {
                draft.added_at = Some(original.clone());
            }
        }
        let book = normalize(draft);

        match existing {
            Some(index) => {
                info!("Updating book {} ({})", book.id, book.title);
                books[index] = book.clone();
            }
            None => {
                info!("Adding book {} ({})", book.id, book.title);
                books.push(book.clone());
            }
        }

        self.save(&books)?;
        Ok(book)
    }

    /// Remove every record with `id`. Returns whether anything was removed;
    /// the file is only rewritten when it was.
    pub fn delete_book(&self, id: &str) -> Result<bool> {
        let mut books = self.load()?;
        let before = books.len();
        books.retain(|b| b.id != id);

        if books.len() < before {
            self.save(&books)?;
            info!("Deleted book {}", id);
            Ok(true)
        } else {
            debug!("Delete skipped, no book with id {}", id);
            Ok(false)
        }
    }

    /// First record with `id`, if any.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Book>> {
        Ok(self.load()?.into_iter().find(|b| b.id == id))
    }

    /// Patch status, rating and notes of an existing record.
    ///
    /// Returns `None` without writing when no record has `id`.
    pub fn update_book(&self, id: &str, update: BookUpdate) -> Result<Option<Book>> {
        let Some(current) = self.get_by_id(id)? else {
            return Ok(None);
        };

        let mut draft = BookDraft::from(current);
        if let Some(status) = update.status {
            draft.status = Some(status.as_str().to_string());
        }
        if let Some(rating) = update.rating {
            draft.rating = Some(rating);
        }
        if let Some(notes) = update.notes {
            draft.notes = Some(notes);
        }

        self.upsert_book(draft).map(Some)
    }

    fn ensure_storage(&self) -> Result<()> {
        if !self.path.exists() {
            info!("Initializing empty library at {}", self.path.display());
            write_json(&self.path, &Vec::<Book>::new())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadifyError;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, LibraryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LibraryStore::new(temp_dir.path().join("data").join("library.json"));
        (temp_dir, store)
    }

    fn draft(id: &str, title: &str) -> BookDraft {
        BookDraft {
            title: Some(title.to_string()),
            authors: Some(vec!["Ursula K. Le Guin".to_string()]),
            page_count: Some(250),
            ..BookDraft::new(id)
        }
    }

    #[test]
    fn test_load_bootstraps_empty_file() {
        let (_temp, store) = setup_store();
        assert!(!store.path().exists());

        let first = store.load().unwrap();
        assert!(first.is_empty());
        assert!(store.path().exists());
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap().trim(),
            "[]"
        );

        let second = store.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_corrupt_file_is_storage_error() {
        let (_temp, store) = setup_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not an array").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_storage());
        assert!(matches!(err, ReadifyError::Json { .. }));
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "{ not an array"
        );
    }

    #[test]
    fn test_upsert_appends_new_book() {
        let (_temp, store) = setup_store();

        let stored = store.upsert_book(draft("a", "The Dispossessed")).unwrap();
        assert_eq!(stored.status, ReadingStatus::Planned);
        assert!(stored.added_at.ends_with('Z'));

        let books = store.load().unwrap();
        assert_eq!(books, vec![stored]);
    }

    #[test]
    fn test_upsert_replaces_and_preserves_added_at() {
        let (_temp, store) = setup_store();
        store
            .upsert_book(BookDraft {
                added_at: Some("2021-05-01T10:00:00Z".to_string()),
                ..draft("a", "The Lathe of Heaven")
            })
            .unwrap();
        store.upsert_book(draft("b", "Always Coming Home")).unwrap();

        // A caller that forgot to carry added_at forward must not reset it.
        let replaced = store
            .upsert_book(BookDraft {
                status: Some("reading".to_string()),
                ..draft("a", "The Lathe of Heaven")
            })
            .unwrap();

        assert_eq!(replaced.added_at, "2021-05-01T10:00:00Z");
        assert_eq!(replaced.status, ReadingStatus::Reading);

        let books = store.load().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0], replaced);
        assert_eq!(books[1].id, "b");
    }

    #[test]
    fn test_upsert_then_get_by_id() {
        let (_temp, store) = setup_store();
        let stored = store
            .upsert_book(BookDraft {
                rating: Some(9),
                ..draft("a", "Tehanu")
            })
            .unwrap();

        let fetched = store.get_by_id("a").unwrap().unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.rating, Some(5));
        assert!(store.get_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_delete_existing_book() {
        let (_temp, store) = setup_store();
        store.upsert_book(draft("a", "A Wizard of Earthsea")).unwrap();
        store.upsert_book(draft("b", "The Tombs of Atuan")).unwrap();

        assert!(store.delete_book("a").unwrap());
        let ids: Vec<_> = store.load().unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b".to_string()]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let (_temp, store) = setup_store();
        store.upsert_book(draft("a", "The Word for World Is Forest")).unwrap();

        let before = store.load().unwrap();
        let modified_before = std::fs::metadata(store.path()).unwrap().modified().unwrap();

        assert!(!store.delete_book("nope").unwrap());

        assert_eq!(store.load().unwrap(), before);
        let modified_after = std::fs::metadata(store.path()).unwrap().modified().unwrap();
        assert_eq!(modified_before, modified_after);
    }

    #[test]
    fn test_update_book_patches_selected_fields() {
        let (_temp, store) = setup_store();
        let original = store
            .upsert_book(BookDraft {
                notes: Some("gift".to_string()),
                ..draft("a", "The Left Hand of Darkness")
            })
            .unwrap();

        let updated = store
            .update_book(
                "a",
                BookUpdate {
                    status: Some(ReadingStatus::Completed),
                    rating: Some(0),
                    notes: None,
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, ReadingStatus::Completed);
        assert_eq!(updated.rating, Some(1));
        assert_eq!(updated.notes, "gift");
        assert_eq!(updated.added_at, original.added_at);
        assert_eq!(updated.title, original.title);
    }

    #[test]
    fn test_update_unknown_book_writes_nothing() {
        let (_temp, store) = setup_store();
        let result = store
            .update_book(
                "ghost",
                BookUpdate {
                    notes: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(result.is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_book_update_is_empty() {
        assert!(BookUpdate::default().is_empty());
        assert!(!BookUpdate {
            rating: Some(3),
            ..Default::default()
        }
        .is_empty());
    }
}
