use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    error::{AppError, AppResult},
    models::Candidate,
    services::{catalog::CatalogProvider, keys::slugify},
};

/// Candidates fetched from one catalog query, in catalog order
pub type CandidateBatch = Vec<Candidate>;

/// Browses the catalog by subject
///
/// Never fails: any upstream error is logged and yields an empty batch.
pub async fn fetch_by_subject(catalog: &dyn CatalogProvider, subject: &str) -> CandidateBatch {
    let slug = slugify(subject);

    match catalog.subject_works(&slug).await {
        Ok(works) => works
            .into_iter()
            .map(|work| Candidate::from_subject_work(subject, work))
            .collect(),
        Err(e) => {
            tracing::warn!(
                subject = %subject,
                slug = %slug,
                provider = catalog.name(),
                error = %e,
                "Subject fetch failed, continuing without it"
            );
            Vec::new()
        }
    }
}

/// Searches the catalog by author
///
/// Never fails: any upstream error is logged and yields an empty batch.
pub async fn fetch_by_author(catalog: &dyn CatalogProvider, author: &str) -> CandidateBatch {
    match catalog.search_by_author(author).await {
        Ok(docs) => docs
            .into_iter()
            .map(Candidate::from_author_doc)
            .collect(),
        Err(e) => {
            tracing::warn!(
                author = %author,
                provider = catalog.name(),
                error = %e,
                "Author fetch failed, continuing without it"
            );
            Vec::new()
        }
    }
}

/// Fetches one batch per subject concurrently, returned in subject order
pub async fn fetch_subject_batches(
    catalog: Arc<dyn CatalogProvider>,
    subjects: &[String],
) -> AppResult<Vec<CandidateBatch>> {
    let tasks = subjects
        .iter()
        .cloned()
        .map(|subject| {
            let catalog = catalog.clone();
            tokio::spawn(async move { fetch_by_subject(catalog.as_ref(), &subject).await })
        })
        .collect();

    join_in_order(tasks).await
}

/// Fetches one batch per author concurrently, returned in author order
pub async fn fetch_author_batches(
    catalog: Arc<dyn CatalogProvider>,
    authors: &[String],
) -> AppResult<Vec<CandidateBatch>> {
    let tasks = authors
        .iter()
        .cloned()
        .map(|author| {
            let catalog = catalog.clone();
            tokio::spawn(async move { fetch_by_author(catalog.as_ref(), &author).await })
        })
        .collect();

    join_in_order(tasks).await
}

/// Awaits tasks in spawn order so batch order never depends on completion order
///
/// Fetch failures are already absorbed inside each task; a task that panicked is a
/// pipeline fault and is reported as such.
async fn join_in_order(tasks: Vec<JoinHandle<CandidateBatch>>) -> AppResult<Vec<CandidateBatch>> {
    let mut batches = Vec::with_capacity(tasks.len());

    for task in tasks {
        match task.await {
            Ok(batch) => batches.push(batch),
            Err(e) => {
                tracing::error!(error = %e, "Candidate fetch task failed");
                return Err(AppError::Internal(e.to_string()));
            }
        }
    }

    Ok(batches)
}
