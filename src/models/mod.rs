use serde::{Deserialize, Serialize};

pub mod bookmark;
pub mod candidate;
pub mod catalog;

pub use bookmark::BookmarkedBook;
pub use candidate::{external_key, Candidate, Provenance};
pub use catalog::{AuthorDoc, AuthorSearchResponse, SubjectWork, SubjectWorksResponse, WorkAuthor};

/// Request body for the recommendations endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Bookmarked books; missing or null is the same as empty
    #[serde(default)]
    pub books: Option<Vec<BookmarkedBook>>,
}

impl RecommendationRequest {
    pub fn into_books(self) -> Vec<BookmarkedBook> {
        self.books.unwrap_or_default()
    }
}

/// A single recommendation returned to the client
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub authors: Vec<String>,
    pub year: Option<i32>,
    pub key: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_library_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Response envelope for the recommendations endpoint
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_books() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert!(request.into_books().is_empty());
    }

    #[test]
    fn test_request_null_books() {
        let request: RecommendationRequest = serde_json::from_str(r#"{"books": null}"#).unwrap();
        assert!(request.into_books().is_empty());
    }

    #[test]
    fn test_recommendation_serialization() {
        let recommendation = Recommendation {
            title: "Hyperion".to_string(),
            authors: vec!["Dan Simmons".to_string()],
            year: None,
            key: "/works/OL45W".to_string(),
            explanation: "Matches subject \"Science Fiction\"".to_string(),
            open_library_url: Some("https://openlibrary.org/works/OL45W".to_string()),
            cover_url: None,
        };

        let value = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Hyperion",
                "authors": ["Dan Simmons"],
                "year": null,
                "key": "/works/OL45W",
                "explanation": "Matches subject \"Science Fiction\"",
                "openLibraryUrl": "https://openlibrary.org/works/OL45W"
            })
        );
    }
}
