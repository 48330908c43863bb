use std::sync::Arc;

use launchsite::cms::ContentSource;
use launchsite::config::Config;

use crate::web::cache::PageCache;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cms: Arc<dyn ContentSource>,
    pub cache: PageCache,
}

impl AppState {
    pub fn new(config: Config, cms: Arc<dyn ContentSource>) -> Self {
        Self {
            config,
            cms,
            cache: PageCache::default(),
        }
    }
}
