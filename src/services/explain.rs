use crate::models::{Candidate, Provenance, Recommendation};

const AUTHOR_CLAUSE: &str = "By an author related to your bookmarks";
const FALLBACK_CLAUSE: &str = "Shares topics with your bookmarked books";

/// Base URLs used to turn catalog keys into links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLinks {
    pub catalog_url: String,
    pub covers_url: String,
}

impl CatalogLinks {
    pub fn new(catalog_url: &str, covers_url: &str) -> Self {
        Self {
            catalog_url: catalog_url.trim_end_matches('/').to_string(),
            covers_url: covers_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute catalog link, only for catalog-relative keys
    pub fn work_url(&self, key: &str) -> Option<String> {
        key.starts_with('/')
            .then(|| format!("{}{}", self.catalog_url, key))
    }

    pub fn cover_url(&self, cover_edition_key: &str) -> String {
        format!("{}/b/olid/{}-M.jpg", self.covers_url, cover_edition_key)
    }
}

/// Human-readable reason a candidate was recommended
///
/// One or two clauses joined with `"; "`; never empty.
pub fn explain(candidate: &Candidate) -> String {
    let mut clauses = Vec::with_capacity(2);

    if let Some(subject) = &candidate.source_subject {
        clauses.push(format!("Matches subject \"{}\"", subject));
    }
    if candidate.provenance == Provenance::Author {
        clauses.push(AUTHOR_CLAUSE.to_string());
    }

    // Subject candidates always carry their subject and author candidates always
    // get the author clause.
    debug_assert!(!clauses.is_empty(), "candidate without explanation: {candidate:?}");
    if clauses.is_empty() {
        clauses.push(FALLBACK_CLAUSE.to_string());
    }

    clauses.join("; ")
}

/// Turns an accepted candidate into the record returned to the client
pub fn compose(candidate: Candidate, links: &CatalogLinks) -> Option<Recommendation> {
    let explanation = explain(&candidate);
    let open_library_url = links.work_url(&candidate.external_key);
    let cover_url = candidate
        .cover_edition_key
        .as_deref()
        .map(|cover| links.cover_url(cover));

    Some(Recommendation {
        title: candidate.title?,
        authors: candidate.authors,
        year: candidate.year,
        key: candidate.external_key,
        explanation,
        open_library_url,
        cover_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(provenance: Provenance, source_subject: Option<&str>) -> Candidate {
        Candidate {
            title: Some("The Left Hand of Darkness".to_string()),
            authors: vec!["Ursula K. Le Guin".to_string()],
            year: Some(1969),
            source_subject: source_subject.map(ToOwned::to_owned),
            provenance,
            external_key: "/works/OL59800W".to_string(),
            cover_edition_key: None,
        }
    }

    fn links() -> CatalogLinks {
        CatalogLinks::new("https://openlibrary.org/", "https://covers.openlibrary.org")
    }

    #[test]
    fn test_explain_subject_candidate() {
        let c = candidate(Provenance::Subject, Some("Science Fiction"));
        assert_eq!(explain(&c), "Matches subject \"Science Fiction\"");
    }

    #[test]
    fn test_explain_author_candidate() {
        let c = candidate(Provenance::Author, None);
        assert_eq!(explain(&c), "By an author related to your bookmarks");
    }

    #[test]
    fn test_explain_author_candidate_with_subject() {
        let c = candidate(Provenance::Author, Some("Gender"));
        assert_eq!(
            explain(&c),
            "Matches subject \"Gender\"; By an author related to your bookmarks"
        );
    }

    #[test]
    fn test_compose_links_catalog_paths() {
        let c = candidate(Provenance::Subject, Some("Science Fiction"));
        let recommendation = compose(c, &links()).unwrap();

        assert_eq!(recommendation.title, "The Left Hand of Darkness");
        assert_eq!(recommendation.key, "/works/OL59800W");
        assert_eq!(
            recommendation.open_library_url.as_deref(),
            Some("https://openlibrary.org/works/OL59800W")
        );
        assert_eq!(recommendation.cover_url, None);
        assert_eq!(recommendation.year, Some(1969));
    }

    #[test]
    fn test_compose_without_catalog_path() {
        let mut c = candidate(Provenance::Author, None);
        c.external_key = "OL123M".to_string();
        c.cover_edition_key = Some("OL123M".to_string());

        let recommendation = compose(c, &links()).unwrap();
        assert_eq!(recommendation.open_library_url, None);
        assert_eq!(
            recommendation.cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/olid/OL123M-M.jpg")
        );
    }

    #[test]
    fn test_compose_untitled_candidate() {
        let mut c = candidate(Provenance::Subject, Some("Poetry"));
        c.title = None;
        assert_eq!(compose(c, &links()), None);
    }
}
