use std::collections::{HashMap, HashSet};

use crate::models::BookmarkedBook;

/// Number of subjects queried against the catalog
pub const TOP_SUBJECTS: usize = 3;

/// Number of authors queried against the catalog
pub const MAX_AUTHORS: usize = 5;

/// Topical and author interests inferred from a set of bookmarks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interests {
    /// Most frequent subjects, highest count first, ties in first-seen order
    pub top_subjects: Vec<String>,
    /// Distinct primary authors in bookmark order
    pub authors: Vec<String>,
}

impl Interests {
    pub fn is_empty(&self) -> bool {
        self.top_subjects.is_empty() && self.authors.is_empty()
    }

    /// Authors to query, capped at [`MAX_AUTHORS`]
    pub fn query_authors(&self) -> &[String] {
        &self.authors[..self.authors.len().min(MAX_AUTHORS)]
    }
}

/// Counts subject occurrences and collects primary authors
///
/// A subject listed twice in one book counts twice.
pub fn extract_interests(books: &[BookmarkedBook]) -> Interests {
    // subject -> (count, first seen position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut authors = Vec::new();
    let mut seen_authors = HashSet::new();

    for book in books {
        for subject in &book.subjects {
            let next_position = counts.len();
            counts
                .entry(subject.as_str())
                .or_insert((0, next_position))
                .0 += 1;
        }

        if let Some(author) = book.primary_author() {
            if seen_authors.insert(author) {
                authors.push(author.to_string());
            }
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(subject, (count, position))| (subject, count, position))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Interests {
        top_subjects: ranked
            .into_iter()
            .take(TOP_SUBJECTS)
            .map(|(subject, _, _)| subject.to_string())
            .collect(),
        authors,
    }
}
