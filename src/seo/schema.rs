//! schema.org structured-data generators.
//!
//! Every function here is total: absent optional input produces documented
//! fallbacks, never a panic. Geo coordinates are the one exception to the
//! fallback rule; with no real coordinates on file the `geo` member is
//! omitted outright.

use serde_json::{json, Map, Value};

use crate::models::{Article, SiteSettings};

const FALLBACK_NAME: &str = "Launchsite";
const FALLBACK_EMAIL: &str = "contact@launchsite.dev";
const FALLBACK_PHONE: &str = "+1-123-456-7890";

/// Which schemas a page asks for. `All` applies the aggregation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Organization,
    Website,
    Breadcrumbs,
    Article,
    LocalBusiness,
    All,
}

/// One breadcrumb trail entry. Relative URLs are resolved against the site
/// base URL when the schema is generated.
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

fn fallback_logo(base_url: &str) -> String {
    format!("{base_url}/images/logo.png")
}

fn site_name(settings: Option<&SiteSettings>) -> String {
    settings
        .and_then(|s| s.site_name.clone())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn social_profiles(settings: Option<&SiteSettings>) -> Vec<String> {
    settings
        .map(|s| s.social_links.iter().map(|l| l.url.clone()).collect())
        .unwrap_or_default()
}

fn resolve_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base_url}{url}")
    }
}

pub fn organization(base_url: &str, settings: Option<&SiteSettings>) -> Value {
    let contact = settings.and_then(|s| s.contact_info.as_ref());
    let logo = settings
        .and_then(|s| s.logo.as_ref())
        .map(|l| l.url.clone())
        .unwrap_or_else(|| fallback_logo(base_url));

    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site_name(settings),
        "url": base_url,
        "logo": logo,
        "sameAs": social_profiles(settings),
        "contactPoint": [{
            "@type": "ContactPoint",
            "telephone": contact.and_then(|c| c.phone.clone()).unwrap_or_else(|| FALLBACK_PHONE.to_string()),
            "contactType": "customer service",
            "email": contact.and_then(|c| c.email.clone()).unwrap_or_else(|| FALLBACK_EMAIL.to_string()),
        }],
    })
}

pub fn website(base_url: &str, settings: Option<&SiteSettings>) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": site_name(settings),
        "url": base_url,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{base_url}/search?q={{search_term_string}}"),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn breadcrumbs(base_url: &str, items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": resolve_url(base_url, &item.url),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Returns `None` when no article document is supplied, so page types
/// without an article can call the aggregator unconditionally.
pub fn article(base_url: &str, doc: Option<&Article>) -> Option<Value> {
    let doc = doc?;

    let author_url = match doc.author.as_ref().and_then(|a| a.slug.as_ref()) {
        Some(slug) => format!("{base_url}/team/{}", slug.current),
        None => format!("{base_url}/about"),
    };

    let mut out = Map::new();
    out.insert("@context".into(), json!("https://schema.org"));
    out.insert("@type".into(), json!("Article"));
    out.insert("headline".into(), json!(doc.title));
    if let Some(image) = &doc.main_image {
        out.insert("image".into(), json!([image.url]));
    }
    out.insert("datePublished".into(), json!(doc.published_at));
    out.insert(
        "dateModified".into(),
        json!(doc.updated_at.clone().unwrap_or_else(|| doc.published_at.clone())),
    );
    if let Some(author) = &doc.author {
        out.insert(
            "author".into(),
            json!({ "@type": "Person", "name": author.name, "url": author_url }),
        );
    }
    out.insert(
        "publisher".into(),
        json!({
            "@type": "Organization",
            "name": FALLBACK_NAME,
            "logo": { "@type": "ImageObject", "url": fallback_logo(base_url) },
        }),
    );
    out.insert(
        "description".into(),
        json!(doc.excerpt.clone().unwrap_or_default()),
    );
    out.insert(
        "mainEntityOfPage".into(),
        json!({ "@type": "WebPage", "@id": format!("{base_url}/blog/{}", doc.slug.current) }),
    );

    Some(Value::Object(out))
}

pub fn local_business(base_url: &str, settings: Option<&SiteSettings>) -> Value {
    let contact = settings.and_then(|s| s.contact_info.as_ref());
    let address = contact.and_then(|c| c.address.as_ref());
    let image = settings
        .and_then(|s| s.logo.as_ref())
        .map(|l| l.url.clone())
        .unwrap_or_else(|| fallback_logo(base_url));

    let mut out = Map::new();
    out.insert("@context".into(), json!("https://schema.org"));
    out.insert("@type".into(), json!("LocalBusiness"));
    out.insert("name".into(), json!(site_name(settings)));
    out.insert("image".into(), json!(image));
    out.insert("@id".into(), json!(base_url));
    out.insert("url".into(), json!(base_url));
    out.insert(
        "telephone".into(),
        json!(contact
            .and_then(|c| c.phone.clone())
            .unwrap_or_else(|| FALLBACK_PHONE.to_string())),
    );
    out.insert(
        "address".into(),
        json!({
            "@type": "PostalAddress",
            "streetAddress": address.and_then(|a| a.street.clone()).unwrap_or_else(|| "123 Main St".to_string()),
            "addressLocality": address.and_then(|a| a.city.clone()).unwrap_or_else(|| "City".to_string()),
            "addressRegion": address.and_then(|a| a.state.clone()).unwrap_or_else(|| "State".to_string()),
            "postalCode": address.and_then(|a| a.postal_code.clone()).unwrap_or_else(|| "12345".to_string()),
            "addressCountry": address.and_then(|a| a.country.clone()).unwrap_or_else(|| "US".to_string()),
        }),
    );

    // No fabricated coordinates: the geo member only exists when the
    // settings document carries real ones.
    if let Some(coords) = contact.and_then(|c| c.coordinates.as_ref()) {
        out.insert(
            "geo".into(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": coords.latitude,
                "longitude": coords.longitude,
            }),
        );
    }

    if let Some(hours) = settings.and_then(|s| s.business_hours.as_ref()) {
        let specs: Vec<Value> = hours
            .iter()
            .map(|h| {
                json!({
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": h.days,
                    "opens": h.opens,
                    "closes": h.closes,
                })
            })
            .collect();
        out.insert("openingHoursSpecification".into(), json!(specs));
    }

    out.insert("sameAs".into(), json!(social_profiles(settings)));

    Value::Object(out)
}

/// Inputs for one page's structured-data graph.
#[derive(Default)]
pub struct SchemaRequest<'a> {
    pub settings: Option<&'a SiteSettings>,
    pub breadcrumbs: &'a [Breadcrumb],
    pub article: Option<&'a Article>,
}

/// Builds the set of schema objects for a page, in fixed declaration order.
/// An empty result means the page must embed no script tag at all.
pub fn schema_graph(base_url: &str, kind: SchemaKind, request: &SchemaRequest<'_>) -> Vec<Value> {
    let mut schemas = Vec::new();

    if matches!(kind, SchemaKind::All | SchemaKind::Organization) {
        schemas.push(organization(base_url, request.settings));
    }
    if matches!(kind, SchemaKind::All | SchemaKind::Website) {
        schemas.push(website(base_url, request.settings));
    }
    if matches!(kind, SchemaKind::All | SchemaKind::Breadcrumbs) && !request.breadcrumbs.is_empty()
    {
        schemas.push(breadcrumbs(base_url, request.breadcrumbs));
    }
    if matches!(kind, SchemaKind::All | SchemaKind::Article) {
        if let Some(value) = article(base_url, request.article) {
            schemas.push(value);
        }
    }
    if matches!(kind, SchemaKind::All | SchemaKind::LocalBusiness) {
        schemas.push(local_business(base_url, request.settings));
    }

    schemas
}
