use serde::Deserialize;

use super::{Image, Slug};

/// A blog article, consumed only by the structured-data generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub published_at: String,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub main_image: Option<Image>,
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub image: Option<Image>,
}
