/// Open Library catalog provider
///
/// API Flow:
/// 1. Subject browse: /subjects/{slug}.json?limit=N → `works`
/// 2. Author search: /search.json?author={name}&limit=N → `docs`
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{AuthorDoc, AuthorSearchResponse, SubjectWork, SubjectWorksResponse},
    services::catalog::CatalogProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct OpenLibraryClient {
    http_client: HttpClient,
    api_url: String,
    fetch_limit: u32,
}

impl OpenLibraryClient {
    /// Creates a client with the configured timeout, user agent and page size
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.catalog_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self::with_client(
            http_client,
            &config.catalog_url,
            config.catalog_fetch_limit,
        ))
    }

    pub fn with_client(http_client: HttpClient, api_url: &str, fetch_limit: u32) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            fetch_limit,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self.http_client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for OpenLibraryClient {
    async fn subject_works(&self, slug: &str) -> AppResult<Vec<SubjectWork>> {
        if slug.is_empty() {
            return Err(AppError::InvalidInput(
                "Subject slug cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/subjects/{}.json", self.api_url, slug);
        let response: SubjectWorksResponse = self
            .get_json(&url, &[("limit", self.fetch_limit.to_string())])
            .await?;
        let works = response.works.unwrap_or_default();

        tracing::debug!(
            slug = %slug,
            results = works.len(),
            provider = self.name(),
            "Subject works fetched"
        );

        Ok(works)
    }

    async fn search_by_author(&self, author: &str) -> AppResult<Vec<AuthorDoc>> {
        if author.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Author query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search.json", self.api_url);
        let response: AuthorSearchResponse = self
            .get_json(
                &url,
                &[
                    ("author", author.to_string()),
                    ("limit", self.fetch_limit.to_string()),
                ],
            )
            .await?;
        let docs = response.docs.unwrap_or_default();

        tracing::debug!(
            author = %author,
            results = docs.len(),
            provider = self.name(),
            "Author search completed"
        );

        Ok(docs)
    }

    fn name(&self) -> &'static str {
        "open_library"
    }
}
