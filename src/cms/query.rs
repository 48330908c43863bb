//! Query text sent to the content store's query API.
//!
//! Queries are parameterized; caller-supplied values travel as `$name`
//! parameters, never spliced into the query text.

/// Full page document by slug, with SEO fields and section bodies.
pub const PAGE_BY_SLUG: &str = r#"*[_type == "page" && slug.current == $slug][0]{
  _id, _updatedAt, title, slug,
  seo{ metaTitle, metaDescription, openGraphImage{ "url": asset->url, alt } },
  sections[]
}"#;

/// All published page slugs, for the sitemap.
pub const ALL_PAGE_SLUGS: &str =
    r#"*[_type == "page" && defined(slug.current)]{ "slug": slug.current, _updatedAt }"#;

/// The settings singleton, pinned by its fixed document id.
pub const SITE_SETTINGS: &str = r#"*[_id == "siteSettings"][0]{
  siteName, title, description,
  logo{ "url": asset->url, alt },
  mainNavigation, footerNavigation, socialLinks, contactInfo, businessHours
}"#;

/// Encodes one query parameter pair for the query API, which expects values
/// as JSON literals under a `$`-prefixed name.
pub fn param(name: &str, value: &str) -> (String, String) {
    let encoded = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
    (format!("${name}"), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_json_encoded() {
        assert_eq!(
            param("slug", "about"),
            ("$slug".to_string(), "\"about\"".to_string())
        );
        // Quotes in a value must not break out of the JSON literal.
        assert_eq!(
            param("slug", "a\"b"),
            ("$slug".to_string(), "\"a\\\"b\"".to_string())
        );
    }
}
