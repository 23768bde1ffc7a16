use super::catalog::{AuthorDoc, SubjectWork};

/// Author search documents keep at most this many author names
pub const MAX_AUTHOR_DOC_AUTHORS: usize = 3;

/// Which catalog query produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Subject,
    Author,
}

/// A catalog work under consideration for recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// `None` when the catalog sent no usable title; such candidates are never recommended
    /// but still count toward the size of the pool
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub source_subject: Option<String>,
    pub provenance: Provenance,
    /// Catalog path, cover edition key or title; empty only for untitled candidates
    pub external_key: String,
    pub cover_edition_key: Option<String>,
}

/// Picks the identifier used to link a work back to the catalog
///
/// Priority: catalog key, then cover edition key, then title. Empty strings are
/// treated as missing. Returns `None` only when all three are absent.
pub fn external_key(
    key: Option<&str>,
    cover_edition_key: Option<&str>,
    title: Option<&str>,
) -> Option<String> {
    [key, cover_edition_key, title]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Candidate {
    /// Builds a subject-sourced candidate; every such candidate carries its subject
    pub fn from_subject_work(subject: &str, work: SubjectWork) -> Self {
        let title = non_empty(work.title);
        let external_key = external_key(
            work.key.as_deref(),
            work.cover_edition_key.as_deref(),
            title.as_deref(),
        )
        .unwrap_or_default();

        let authors = work
            .authors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|author| non_empty(author.name))
            .collect();

        Self {
            title,
            authors,
            year: work.first_publish_year,
            source_subject: Some(subject.to_string()),
            provenance: Provenance::Subject,
            external_key,
            cover_edition_key: non_empty(work.cover_edition_key),
        }
    }

    /// Builds an author-sourced candidate, keeping the document's first subject when present
    pub fn from_author_doc(doc: AuthorDoc) -> Self {
        let title = non_empty(doc.title);
        let external_key = external_key(
            doc.key.as_deref(),
            doc.cover_edition_key.as_deref(),
            title.as_deref(),
        )
        .unwrap_or_default();

        let authors = doc
            .author_name
            .unwrap_or_default()
            .into_iter()
            .take(MAX_AUTHOR_DOC_AUTHORS)
            .collect();

        let source_subject = doc
            .subject
            .and_then(|subjects| subjects.into_iter().next())
            .filter(|s| !s.is_empty());

        Self {
            title,
            authors,
            year: doc.first_publish_year,
            source_subject,
            provenance: Provenance::Author,
            external_key,
            cover_edition_key: non_empty(doc.cover_edition_key),
        }
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}
