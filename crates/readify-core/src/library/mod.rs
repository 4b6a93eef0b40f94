//! Library persistence.
//!
//! - Atomic JSON file operations
//! - [`LibraryStore`]: load/save/upsert/delete/lookup over one JSON array file

mod atomic;
mod store;

pub use atomic::{read_json, write_json};
pub use store::{BookUpdate, LibraryStore};
