use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Image, Link};

/// One block of a page body, tagged by `_type` in the content store.
///
/// The set of variants is closed here but open in the store: authors can
/// publish section types this build has never heard of. Those decode to
/// [`Section::Unknown`] instead of failing the whole page, and the renderer
/// skips them with a warning.
#[derive(Debug, Clone)]
pub enum Section {
    Hero(HeroSection),
    Features(FeaturesSection),
    Testimonials(TestimonialsSection),
    Cta(CtaSection),
    Contact(ContactSection),
    /// Fallback for discriminators outside the known set, and for known
    /// types whose payload no longer matches this build's shape.
    Unknown { kind: String, key: String },
}

impl Section {
    pub fn from_value(value: Value) -> Section {
        let kind = value
            .get("_type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let key = value
            .get("_key")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match kind.as_str() {
            "heroSection" => serde_json::from_value(value.clone()).map(Section::Hero),
            "featuresSection" => serde_json::from_value(value.clone()).map(Section::Features),
            "testimonialsSection" => {
                serde_json::from_value(value.clone()).map(Section::Testimonials)
            }
            "ctaSection" => serde_json::from_value(value.clone()).map(Section::Cta),
            "contactSection" => serde_json::from_value(value.clone()).map(Section::Contact),
            _ => return Section::Unknown { kind, key },
        };

        parsed.unwrap_or(Section::Unknown { kind, key })
    }

    /// Order-preserving identity among siblings on a page.
    pub fn key(&self) -> &str {
        match self {
            Section::Hero(s) => &s.key,
            Section::Features(s) => &s.key,
            Section::Testimonials(s) => &s.key,
            Section::Cta(s) => &s.key,
            Section::Contact(s) => &s.key,
            Section::Unknown { key, .. } => key,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Section::Hero(_) => "heroSection",
            Section::Features(_) => "featuresSection",
            Section::Testimonials(_) => "testimonialsSection",
            Section::Cta(_) => "ctaSection",
            Section::Contact(_) => "contactSection",
            Section::Unknown { kind, .. } => kind,
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Section::from_value(value))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub background_image: Option<Image>,
    #[serde(default)]
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub layout: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsSection {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub avatar: Option<Image>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(rename = "primaryCTA", default)]
    pub primary_cta: Option<CtaLink>,
    #[serde(rename = "secondaryCTA", default)]
    pub secondary_cta: Option<CtaLink>,
    #[serde(default)]
    pub background_image: Option<Image>,
    #[serde(default)]
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceOption>,
    #[serde(default)]
    pub submit_endpoint: Option<String>,
    #[serde(default)]
    pub success_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceOption {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_discriminator_decodes_to_variant() {
        let section = Section::from_value(json!({
            "_type": "heroSection",
            "_key": "a1",
            "heading": "Grow faster",
            "subheading": "With less effort",
            "cta": { "title": "Start", "href": "/contact" }
        }));
        match section {
            Section::Hero(hero) => {
                assert_eq!(hero.key, "a1");
                assert_eq!(hero.heading, "Grow faster");
                assert_eq!(hero.cta.unwrap().href, "/contact");
            }
            other => panic!("expected hero, got {:?}", other),
        }
    }

    #[test]
    fn unknown_discriminator_falls_back() {
        let section = Section::from_value(json!({
            "_type": "videoSection",
            "_key": "v1",
            "url": "https://example.com/clip.mp4"
        }));
        match section {
            Section::Unknown { kind, key } => {
                assert_eq!(kind, "videoSection");
                assert_eq!(key, "v1");
            }
            other => panic!("expected unknown, got {:?}", other),
        }
    }

    #[test]
    fn malformed_known_payload_falls_back_instead_of_failing() {
        // heroSection without the required heading
        let section = Section::from_value(json!({ "_type": "heroSection", "_key": "h2" }));
        assert!(matches!(section, Section::Unknown { .. }));
    }

    #[test]
    fn missing_discriminator_falls_back() {
        let section = Section::from_value(json!({ "_key": "x" }));
        match section {
            Section::Unknown { kind, key } => {
                assert_eq!(kind, "");
                assert_eq!(key, "x");
            }
            other => panic!("expected unknown, got {:?}", other),
        }
    }
}
