/// Book catalog abstraction
///
/// The recommendation pipeline only reads from the catalog: it browses works by
/// subject and searches works by author. Implementations report upstream failures
/// as errors; the candidate fetchers decide how to degrade.
use crate::{
    error::AppResult,
    models::{AuthorDoc, SubjectWork},
};

pub mod open_library;

pub use open_library::OpenLibraryClient;

/// Trait for catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Works filed under a subject, addressed by its slug
    async fn subject_works(&self, slug: &str) -> AppResult<Vec<SubjectWork>>;

    /// Search documents for works by an author
    async fn search_by_author(&self, author: &str) -> AppResult<Vec<AuthorDoc>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
