use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::common::errors::CmsError;
use crate::config::CmsConfig;
use crate::models::{ContactSubmission, Page, SiteSettings, SlugEntry};

use super::query;
use super::source::ContentSource;

/// HTTP client for the hosted content store's query and mutation APIs.
/// One instance per process; the underlying connection pool is shared.
#[derive(Clone)]
pub struct CmsClient {
    http: Client,
    config: CmsConfig,
}

/// The query API wraps every result in `{"result": ...}`.
#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(String, String)],
    ) -> Result<T, CmsError> {
        let mut request = self
            .http
            .get(self.config.query_url())
            .query(&[("query", groq)]);
        for (name, value) in params {
            request = request.query(&[(name.as_str(), value.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status(status.as_u16()));
        }

        let body: QueryResponse<T> = response.json().await?;
        Ok(body.result)
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError> {
        self.fetch(query::PAGE_BY_SLUG, &[query::param("slug", slug)])
            .await
    }

    async fn all_page_slugs(&self) -> Result<Vec<SlugEntry>, CmsError> {
        self.fetch(query::ALL_PAGE_SLUGS, &[]).await
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, CmsError> {
        self.fetch(query::SITE_SETTINGS, &[]).await
    }

    async fn create_submission(&self, submission: &ContactSubmission) -> Result<(), CmsError> {
        let token = self.config.token.as_deref().ok_or(CmsError::MissingToken)?;

        let mut doc = serde_json::to_value(submission)?;
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("_type".to_string(), json!("contactSubmission"));
        }

        let response = self
            .http
            .post(self.config.mutate_url())
            .bearer_auth(token)
            .json(&json!({ "mutations": [{ "create": doc }] }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status(status.as_u16()));
        }
        Ok(())
    }
}
