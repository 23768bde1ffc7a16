use std::collections::HashSet;

use crate::models::{BookmarkedBook, Candidate};
use crate::services::keys::identity_key;

/// Author searches run only when subject browsing produced fewer candidates than this
pub const AUTHOR_FALLBACK_THRESHOLD: usize = 10;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Identity keys of the user's own books
pub fn bookmarked_keys(books: &[BookmarkedBook]) -> HashSet<String> {
    books
        .iter()
        .map(|book| identity_key(&book.title, book.primary_author()))
        .collect()
}

/// Identity of a candidate, keyed on its first author
pub fn candidate_key(candidate: &Candidate) -> Option<String> {
    candidate
        .title
        .as_deref()
        .map(|title| identity_key(title, candidate.primary_author()))
}

/// Whether the subject pool is thin enough to warrant author searches
pub fn needs_author_candidates(subject_batches: &[Vec<Candidate>], author_count: usize) -> bool {
    let pooled: usize = subject_batches.iter().map(Vec::len).sum();
    pooled < AUTHOR_FALLBACK_THRESHOLD && author_count > 0
}

/// Greedy single-pass selection over candidate batches in priority order
///
/// The first occurrence of an identity wins, anything matching a bookmarked book or
/// lacking a title is skipped, and the walk stops at [`MAX_RECOMMENDATIONS`]
/// without evaluating the rest.
pub fn select_candidates<I>(batches: I, bookmarked: &HashSet<String>) -> Vec<Candidate>
where
    I: IntoIterator<Item = Vec<Candidate>>,
{
    let mut seen = HashSet::new();

    batches
        .into_iter()
        .flatten()
        .filter(|candidate| match candidate_key(candidate) {
            Some(key) => !bookmarked.contains(&key) && seen.insert(key),
            None => false,
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provenance;

    fn subject_candidate(title: &str, author: &str, subject: &str) -> Candidate {
        Candidate {
            title: Some(title.to_string()),
            authors: vec![author.to_string()],
            year: None,
            source_subject: Some(subject.to_string()),
            provenance: Provenance::Subject,
            external_key: format!("/works/{}", title.replace(' ', "_")),
            cover_edition_key: None,
        }
    }

    fn author_candidate(title: &str, author: &str) -> Candidate {
        Candidate {
            source_subject: None,
            provenance: Provenance::Author,
            ..subject_candidate(title, author, "")
        }
    }

    fn dune_bookmarks() -> Vec<BookmarkedBook> {
        vec![BookmarkedBook::new(
            "Dune",
            &["Frank Herbert"],
            &["Science Fiction", "Adventure"],
        )]
    }

    #[test]
    fn test_bookmarked_keys() {
        let keys = bookmarked_keys(&[
            BookmarkedBook::new("Dune", &["Frank Herbert"], &[]),
            BookmarkedBook::new("Beowulf", &[], &[]),
        ]);

        assert_eq!(keys.len(), 2);
        assert!(keys.contains("dune|frank herbert"));
        assert!(keys.contains("beowulf|"));
    }

    #[test]
    fn test_excludes_bookmarked_books() {
        let bookmarked = bookmarked_keys(&dune_bookmarks());
        let batches = vec![vec![
            subject_candidate("DUNE", "frank herbert", "Science Fiction"),
            subject_candidate("Hyperion", "Dan Simmons", "Science Fiction"),
        ]];

        let selected = select_candidates(batches, &bookmarked);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title.as_deref(), Some("Hyperion"));
    }

    #[test]
    fn test_same_title_different_author_is_distinct() {
        let bookmarked = bookmarked_keys(&dune_bookmarks());
        let batches = vec![vec![subject_candidate("Dune", "Brian Herbert", "Adventure")]];

        assert_eq!(select_candidates(batches, &bookmarked).len(), 1);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let batches = vec![
            vec![subject_candidate("Hyperion", "Dan Simmons", "Science Fiction")],
            vec![author_candidate("hyperion", "DAN SIMMONS")],
        ];

        let selected = select_candidates(batches, &HashSet::new());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].provenance, Provenance::Subject);
    }

    #[test]
    fn test_skips_untitled_candidates() {
        let mut untitled = subject_candidate("x", "Nobody", "Poetry");
        untitled.title = None;

        let batches = vec![vec![untitled, subject_candidate("Odes", "Keats", "Poetry")]];
        let selected = select_candidates(batches, &HashSet::new());

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title.as_deref(), Some("Odes"));
    }

    #[test]
    fn test_caps_at_max_and_preserves_order() {
        let batches = vec![
            (0..4)
                .map(|i| subject_candidate(&format!("S{i}"), "A", "Art"))
                .collect::<Vec<_>>(),
            (0..4)
                .map(|i| author_candidate(&format!("T{i}"), "B"))
                .collect::<Vec<_>>(),
        ];

        let selected = select_candidates(batches, &HashSet::new());
        let titles: Vec<_> = selected.iter().filter_map(|c| c.title.as_deref()).collect();
        assert_eq!(titles, vec!["S0", "S1", "S2", "S3", "T0"]);
    }

    #[test]
    fn test_result_has_unique_keys_outside_bookmarks() {
        let bookmarks = dune_bookmarks();
        let bookmarked = bookmarked_keys(&bookmarks);
        let batches = vec![
            vec![
                subject_candidate("Dune", "Frank Herbert", "Science Fiction"),
                subject_candidate("Solaris", "Stanislaw Lem", "Science Fiction"),
                subject_candidate("Solaris", "Stanislaw Lem", "Science Fiction"),
            ],
            vec![
                subject_candidate("Solaris", "Stanislaw Lem", "Adventure"),
                subject_candidate("Kim", "Rudyard Kipling", "Adventure"),
            ],
            vec![author_candidate("Dune Messiah", "Frank Herbert")],
        ];

        let selected = select_candidates(batches, &bookmarked);
        let keys: Vec<String> = selected.iter().filter_map(candidate_key).collect();
        let unique: HashSet<&String> = keys.iter().collect();

        assert_eq!(keys.len(), 3);
        assert_eq!(unique.len(), keys.len());
        assert!(keys.iter().all(|k| !bookmarked.contains(k)));
    }

    #[test]
    fn test_needs_author_candidates() {
        let nine = vec![(0..9)
            .map(|i| subject_candidate(&format!("S{i}"), "A", "Art"))
            .collect::<Vec<_>>()];
        let ten = vec![
            (0..5)
                .map(|i| subject_candidate(&format!("S{i}"), "A", "Art"))
                .collect::<Vec<_>>(),
            (0..5)
                .map(|i| subject_candidate(&format!("U{i}"), "A", "War"))
                .collect::<Vec<_>>(),
        ];

        assert!(needs_author_candidates(&nine, 1));
        assert!(!needs_author_candidates(&nine, 0));
        assert!(!needs_author_candidates(&ten, 3));
        assert!(needs_author_candidates(&[], 1));
    }
}
