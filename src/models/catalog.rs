use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Catalog API Types
// ============================================================================
//
// Every field is optional and decoded on its own: a missing or mistyped field
// becomes `None`, and a list entry of the wrong shape is dropped, so one odd
// document never fails the whole response.

/// Raw API response from GET /subjects/{slug}.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectWorksResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub works: Option<Vec<SubjectWork>>,
}

/// A work listed under a subject
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectWork {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub authors: Option<Vec<WorkAuthor>>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub first_publish_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_edition_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Raw API response from GET /search.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorSearchResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub docs: Option<Vec<AuthorDoc>>,
}

/// A search document returned for an author query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDoc {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub author_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub first_publish_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_edition_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub subject: Option<Vec<String>>,
}

/// Reads a field, treating a value of the wrong type as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a list entry by entry, dropping entries that do not decode
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Reads a year sent either as a number or as a numeric string
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|year| i32::try_from(year).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
