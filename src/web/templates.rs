use askama::Template;

use launchsite::models::{NavItem, SocialLink};

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: String,
    /// Serialized JSON-LD array; `None` means no script tag is emitted.
    pub schema_json: Option<String>,
    pub site_name: String,
    pub main_navigation: Vec<NavItem>,
    pub footer_navigation: Vec<NavItem>,
    pub social_links: Vec<SocialLink>,
    /// Pre-rendered section markup, inserted unescaped.
    pub sections_html: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub site_name: String,
}
