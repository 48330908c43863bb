use async_trait::async_trait;

use crate::common::errors::CmsError;
use crate::models::{ContactSubmission, Page, SiteSettings, SlugEntry};

/// Read/write surface of the hosted content store.
///
/// Handlers depend on this trait rather than on the HTTP client directly so
/// the web layer can be exercised against an in-memory store in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Not-found is `Ok(None)`, distinct from a transport failure.
    async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError>;

    async fn all_page_slugs(&self) -> Result<Vec<SlugEntry>, CmsError>;

    async fn site_settings(&self) -> Result<Option<SiteSettings>, CmsError>;

    /// Persists a new contact submission document. Requires a write token.
    async fn create_submission(&self, submission: &ContactSubmission) -> Result<(), CmsError>;
}
