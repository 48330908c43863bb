pub mod contact;
pub mod pages;
pub mod revalidate;
pub mod sitemap;

#[cfg(test)]
pub mod testutil {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use launchsite::cms::ContentSource;
    use launchsite::common::errors::CmsError;
    use launchsite::config::{CmsConfig, Config};
    use launchsite::models::{ContactSubmission, Page, SiteSettings, SlugEntry};

    /// In-memory content store for handler tests.
    #[derive(Default)]
    pub struct FakeSource {
        pub pages: Vec<Page>,
        pub settings: Option<SiteSettings>,
        pub slugs: Vec<SlugEntry>,
        pub fail: bool,
        pub submissions: Mutex<Vec<ContactSubmission>>,
    }

    #[async_trait]
    impl ContentSource for FakeSource {
        async fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, CmsError> {
            if self.fail {
                return Err(CmsError::Status(503));
            }
            Ok(self.pages.iter().find(|p| p.slug.current == slug).cloned())
        }

        async fn all_page_slugs(&self) -> Result<Vec<SlugEntry>, CmsError> {
            if self.fail {
                return Err(CmsError::Status(503));
            }
            Ok(self.slugs.clone())
        }

        async fn site_settings(&self) -> Result<Option<SiteSettings>, CmsError> {
            if self.fail {
                return Err(CmsError::Status(503));
            }
            Ok(self.settings.clone())
        }

        async fn create_submission(&self, submission: &ContactSubmission) -> Result<(), CmsError> {
            if self.fail {
                return Err(CmsError::Status(503));
            }
            self.submissions
                .lock()
                .expect("submissions lock")
                .push(submission.clone());
            Ok(())
        }
    }

    pub fn test_config(secret: Option<&str>) -> Config {
        Config {
            base_url: "https://example.com".to_string(),
            site_name: "Example".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            revalidate_secret: secret.map(str::to_string),
            cms: CmsConfig {
                project_id: "test".to_string(),
                dataset: "test".to_string(),
                api_host: "api.sanity.io".to_string(),
                api_version: "2023-05-03".to_string(),
                token: None,
            },
        }
    }
}
