use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Image, Section};

/// A page document authored in the content store. Read-only on this side;
/// the reserved slug `home` backs the site root.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seo: Option<SeoMetadata>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Slug wrapper matching the content store's `{current}` shape on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Slug {
    pub current: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub open_graph_image: Option<Image>,
}

/// Minimal projection used for the sitemap: one entry per published page.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugEntry {
    pub slug: String,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}
