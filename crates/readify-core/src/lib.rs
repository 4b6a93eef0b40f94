//! Readify Core - headless library for personal book tracking.
//!
//! Provides the record model, the JSON-backed library store, statistics over
//! a collection, and a client for the remote book catalog. It can be used
//! programmatically without the `readify` CLI.
//!
//! # Example
//!
//! ```rust,ignore
//! use readify_core::{compute_stats, BookDraft, LibraryStore};
//!
//! fn main() -> readify_core::Result<()> {
//!     let store = LibraryStore::new("/path/to/library.json");
//!
//!     store.upsert_book(BookDraft {
//!         title: Some("The Dispossessed".to_string()),
//!         ..BookDraft::new("vol-123")
//!     })?;
//!
//!     let stats = compute_stats(&store.load()?);
//!     println!("{} books, {} pages read", stats.total, stats.pages_completed);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod stats;

pub use catalog::{CatalogClient, CatalogVolume};
pub use config::default_library_path;
pub use error::{ReadifyError, Result};
pub use library::{BookUpdate, LibraryStore};
pub use models::{normalize, Book, BookDraft, ReadingStatus};
pub use stats::{compute_stats, AuthorCount, LibraryStats};
