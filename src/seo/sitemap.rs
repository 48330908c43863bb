//! Sitemap and robots policy derived from known page slugs.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::SlugEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// One static root entry plus one entry per content-managed page. The
/// reserved `home` slug is the root and is not repeated.
pub fn sitemap_entries(
    base_url: &str,
    now: DateTime<Utc>,
    slugs: &[SlugEntry],
) -> Vec<SitemapEntry> {
    let mut entries = vec![SitemapEntry {
        url: base_url.to_string(),
        last_modified: now,
        change_frequency: ChangeFrequency::Daily,
        priority: 1.0,
    }];

    for entry in slugs {
        if entry.slug == "home" {
            continue;
        }
        entries.push(SitemapEntry {
            url: format!("{base_url}/{}", entry.slug),
            last_modified: entry.updated_at.unwrap_or(now),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        });
    }

    entries
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Robots policy: the authoring tool and the API prefix stay out of crawlers.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /studio/\n\
         Disallow: /api/\n\
         \n\
         Sitemap: {base_url}/sitemap.xml\n"
    )
}
