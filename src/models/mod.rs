mod article;
mod page;
mod section;
mod settings;
mod submission;

pub use article::{Article, Author};
pub use page::{Page, SeoMetadata, Slug, SlugEntry};
pub use section::{
    CtaLink, CtaSection, ContactSection, Feature, FeaturesSection, HeroSection, Section,
    ServiceOption, Testimonial, TestimonialsSection,
};
pub use settings::{
    Address, BusinessHours, ContactInfo, Coordinates, NavItem, SiteSettings, SocialLink,
};
pub use submission::ContactSubmission;

use serde::{Deserialize, Serialize};

/// An image resolved from the content store's asset pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A navigation or call-to-action link. Links have no identity beyond
/// their position in the list that holds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub is_external: bool,
}
