use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{BookmarkedBook, Recommendation},
    services::{
        aggregate::{bookmarked_keys, needs_author_candidates, select_candidates},
        candidates::{fetch_author_batches, fetch_subject_batches},
        catalog::CatalogProvider,
        explain::{compose, CatalogLinks},
        interests::extract_interests,
    },
};

/// Generates book recommendations from a user's bookmarks
///
/// Infers the user's top subjects and primary authors, browses the catalog for
/// related works, drops anything the user already has or that repeats an earlier
/// pick, and explains each of the (at most five) survivors. Nothing is kept
/// between calls.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<dyn CatalogProvider>,
    links: CatalogLinks,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn CatalogProvider>, links: CatalogLinks) -> Self {
        Self { catalog, links }
    }

    pub async fn recommend(&self, books: &[BookmarkedBook]) -> AppResult<Vec<Recommendation>> {
        if books.is_empty() {
            return Ok(Vec::new());
        }

        // 1. Interest signals
        let interests = extract_interests(books);
        let bookmarked = bookmarked_keys(books);

        tracing::info!(
            bookmarks = books.len(),
            subjects = ?interests.top_subjects,
            authors = interests.authors.len(),
            "Extracted interests"
        );

        // 2. Subject candidates, then author candidates if the pool is thin
        let mut batches =
            fetch_subject_batches(self.catalog.clone(), &interests.top_subjects).await?;

        if needs_author_candidates(&batches, interests.authors.len()) {
            let author_batches =
                fetch_author_batches(self.catalog.clone(), interests.query_authors()).await?;
            batches.extend(author_batches);
        }

        let pooled: usize = batches.iter().map(Vec::len).sum();

        // 3. Dedup against bookmarks and earlier picks
        let selected = select_candidates(batches, &bookmarked);

        tracing::info!(
            candidates = pooled,
            accepted = selected.len(),
            provider = self.catalog.name(),
            "Recommendations selected"
        );

        // 4. Explain
        Ok(selected
            .into_iter()
            .filter_map(|candidate| compose(candidate, &self.links))
            .collect())
    }
}
