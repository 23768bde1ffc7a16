use serde::Deserialize;

/// A book the user has bookmarked, as supplied by the caller
///
/// Deserialized leniently from the catalog document shape the client stores:
/// `title` may be missing, `author_name` may be a list or a bare string, and
/// `subject` entries may be blank.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "RawBookmark")]
pub struct BookmarkedBook {
    /// Trimmed title, empty when the caller sent none
    pub title: String,
    /// Author names in catalog order, blanks removed
    pub author_names: Vec<String>,
    /// Trimmed subject names in catalog order, blanks removed
    pub subjects: Vec<String>,
}

impl BookmarkedBook {
    pub fn new(title: &str, author_names: &[&str], subjects: &[&str]) -> Self {
        Self::from(RawBookmark {
            title: Some(title.to_string()),
            author_name: Some(AuthorNames::Many(
                author_names.iter().map(|a| Some(a.to_string())).collect(),
            )),
            subject: Some(subjects.iter().map(|s| Some(s.to_string())).collect()),
        })
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.author_names.first().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorNames {
    One(String),
    Many(Vec<Option<String>>),
}

#[derive(Debug, Deserialize)]
struct RawBookmark {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<AuthorNames>,
    #[serde(default)]
    subject: Option<Vec<Option<String>>>,
}

impl From<RawBookmark> for BookmarkedBook {
    fn from(raw: RawBookmark) -> Self {
        let author_names = match raw.author_name {
            Some(AuthorNames::One(name)) => vec![name],
            Some(AuthorNames::Many(names)) => names.into_iter().flatten().collect(),
            None => Vec::new(),
        }
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect();

        let subjects = raw
            .subject
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            title: raw.title.unwrap_or_default().trim().to_string(),
            author_names,
            subjects,
        }
    }
}
