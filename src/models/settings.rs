use serde::Deserialize;

use super::{Image, Link};

/// Singleton settings document. Exactly one instance exists in the content
/// store, pinned by a fixed document id rather than by the data model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<Image>,
    #[serde(default)]
    pub main_navigation: Vec<NavItem>,
    #[serde(default)]
    pub footer_navigation: Vec<NavItem>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub business_hours: Option<Vec<BusinessHours>>,
}

pub type NavItem = Link;

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub platform: Option<String>,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessHours {
    pub days: Vec<String>,
    pub opens: String,
    pub closes: String,
}
