use std::env;

/// Server-wide configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Canonical base URL of the site, without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub bind_addr: String,
    /// Shared secret for the content-change webhook. When unset every
    /// webhook call is rejected.
    pub revalidate_secret: Option<String>,
    pub cms: CmsConfig,
}

/// Connection details for the hosted content store.
#[derive(Clone, Debug)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_host: String,
    pub api_version: String,
    /// API token, required only for write operations (contact submissions).
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "https://www.launchsite.dev".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| "Launchsite".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            revalidate_secret: env::var("REVALIDATE_SECRET").ok().filter(|s| !s.is_empty()),
            cms: CmsConfig::from_env(),
        }
    }
}

impl CmsConfig {
    pub fn from_env() -> Self {
        Self {
            project_id: env::var("CMS_PROJECT_ID").unwrap_or_else(|_| "demo".to_string()),
            dataset: env::var("CMS_DATASET").unwrap_or_else(|_| "production".to_string()),
            api_host: env::var("CMS_API_HOST").unwrap_or_else(|_| "api.sanity.io".to_string()),
            api_version: env::var("CMS_API_VERSION").unwrap_or_else(|_| "2023-05-03".to_string()),
            token: env::var("CMS_API_TOKEN").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn query_url(&self) -> String {
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id, self.api_host, self.api_version, self.dataset
        )
    }

    pub fn mutate_url(&self) -> String {
        format!(
            "https://{}.{}/v{}/data/mutate/{}",
            self.project_id, self.api_host, self.api_version, self.dataset
        )
    }
}
