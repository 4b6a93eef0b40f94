//! Summary statistics over a book collection.
//!
//! Pure and recomputed on every call; no I/O and no caching.

use crate::models::{Book, ReadingStatus};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of authors reported in [`LibraryStats::top_authors`].
pub const TOP_AUTHORS_LIMIT: usize = 5;

/// An author and how many times they appear across the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub name: String,
    pub count: usize,
}

/// Aggregate view of a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    /// Always holds every status, zero counts included, in enumeration order.
    pub by_status: BTreeMap<ReadingStatus, usize>,
    pub pages_completed: u64,
    pub top_authors: Vec<AuthorCount>,
}

impl LibraryStats {
    /// Count for a single status.
    pub fn count(&self, status: ReadingStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Compute totals, per-status counts, completed pages and the most frequent
/// authors. Author ties keep first-encountered order.
pub fn compute_stats(books: &[Book]) -> LibraryStats {
    let mut by_status: BTreeMap<ReadingStatus, usize> =
        ReadingStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut pages_completed = 0u64;

    let mut author_counts: Vec<AuthorCount> = Vec::new();
    let mut author_index: HashMap<&str, usize> = HashMap::new();

    for book in books {
        *by_status.entry(book.status).or_insert(0) += 1;
        if book.status == ReadingStatus::Completed {
            pages_completed += u64::from(book.page_count);
        }

        for author in &book.authors {
            match author_index.get(author.as_str()) {
                Some(&i) => author_counts[i].count += 1,
                None => {
                    author_index.insert(author.as_str(), author_counts.len());
                    author_counts.push(AuthorCount {
                        name: author.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    author_counts.sort_by(|a, b| b.count.cmp(&a.count));
    author_counts.truncate(TOP_AUTHORS_LIMIT);

    LibraryStats {
        total: books.len(),
        by_status,
        pages_completed,
        top_authors: author_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{normalize, BookDraft};

    fn book(id: &str, status: &str, pages: i64, authors: &[&str]) -> Book {
        normalize(BookDraft {
            status: Some(status.to_string()),
            page_count: Some(pages),
            authors: Some(authors.iter().map(|a| a.to_string()).collect()),
            ..BookDraft::new(id)
        })
    }

    fn author(name: &str, count: usize) -> AuthorCount {
        AuthorCount {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.pages_completed, 0);
        assert!(stats.top_authors.is_empty());
        assert_eq!(
            stats.by_status.keys().copied().collect::<Vec<_>>(),
            ReadingStatus::ALL.to_vec()
        );
        assert!(stats.by_status.values().all(|&c| c == 0));
    }

    #[test]
    fn test_mixed_collection() {
        let books = vec![
            book("1", "completed", 100, &["X"]),
            book("2", "reading", 150, &["X", "Y"]),
            book("3", "planned", 200, &["Z"]),
        ];
        let stats = compute_stats(&books);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(ReadingStatus::Completed), 1);
        assert_eq!(stats.count(ReadingStatus::Reading), 1);
        assert_eq!(stats.count(ReadingStatus::Planned), 1);
        assert_eq!(stats.count(ReadingStatus::Dropped), 0);
        assert_eq!(stats.pages_completed, 100);
        assert_eq!(
            stats.top_authors,
            vec![author("X", 2), author("Y", 1), author("Z", 1)]
        );
    }

    #[test]
    fn test_top_authors_limited_and_ties_keep_first_seen() {
        let books = vec![
            book("1", "planned", 0, &["F", "E", "D"]),
            book("2", "planned", 0, &["C", "B", "A"]),
            book("3", "planned", 0, &["A"]),
        ];
        let stats = compute_stats(&books);

        assert_eq!(
            stats.top_authors,
            vec![
                author("A", 2),
                author("F", 1),
                author("E", 1),
                author("D", 1),
                author("C", 1),
            ]
        );
    }

    #[test]
    fn test_pages_only_count_completed() {
        let books = vec![
            book("1", "completed", 300, &[]),
            book("2", "completed", 120, &[]),
            book("3", "dropped", 999, &[]),
        ];
        let stats = compute_stats(&books);
        assert_eq!(stats.pages_completed, 420);
        assert_eq!(stats.count(ReadingStatus::Dropped), 1);
    }

    #[test]
    fn test_serializes_status_keys_in_order() {
        let json = serde_json::to_string(&compute_stats(&[])).unwrap();
        assert!(json.contains(
            "\"by_status\":{\"planned\":0,\"reading\":0,\"completed\":0,\"dropped\":0}"
        ));
    }
}
