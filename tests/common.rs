use launchsite::models::*;
use serde_json::json;

pub fn seed_settings_full() -> SiteSettings {
    serde_json::from_value(json!({
        "siteName": "Acme Launch Co",
        "logo": { "url": "https://cdn.example.com/logo.png", "alt": "Acme" },
        "mainNavigation": [
            { "title": "Home", "href": "/" },
            { "title": "Pricing", "href": "/pricing" }
        ],
        "socialLinks": [
            { "platform": "twitter", "url": "https://twitter.com/acme" },
            { "platform": "linkedin", "url": "https://linkedin.com/company/acme" }
        ],
        "contactInfo": {
            "email": "hello@acme.test",
            "phone": "+1-555-0100",
            "address": {
                "street": "500 Startup Way",
                "city": "Springfield",
                "state": "IL",
                "postalCode": "62701",
                "country": "US"
            },
            "coordinates": { "latitude": 39.78, "longitude": -89.65 }
        },
        "businessHours": [
            { "days": ["Monday", "Tuesday"], "opens": "09:00", "closes": "17:00" }
        ]
    }))
    .expect("valid settings fixture")
}

pub fn seed_settings_no_address() -> SiteSettings {
    serde_json::from_value(json!({
        "siteName": "Acme Launch Co",
        "contactInfo": { "email": "hello@acme.test" }
    }))
    .expect("valid settings fixture")
}

pub fn seed_article() -> Article {
    serde_json::from_value(json!({
        "_id": "article-1",
        "title": "Launching faster",
        "slug": { "current": "launching-faster" },
        "publishedAt": "2026-02-01T09:00:00Z",
        "_updatedAt": "2026-02-03T12:00:00Z",
        "excerpt": "How to ship a campaign in a week.",
        "mainImage": { "url": "https://cdn.example.com/launch.png" },
        "author": {
            "name": "Dana Reyes",
            "slug": { "current": "dana-reyes" }
        }
    }))
    .expect("valid article fixture")
}

pub fn seed_article_anonymous() -> Article {
    serde_json::from_value(json!({
        "_id": "article-2",
        "title": "Untitled notes",
        "slug": { "current": "untitled-notes" },
        "publishedAt": "2026-02-05T09:00:00Z",
        "author": { "name": "Staff" }
    }))
    .expect("valid article fixture")
}

pub fn seed_sections_with_unknown() -> Vec<Section> {
    serde_json::from_value(json!([
        { "_type": "heroSection", "_key": "s1", "heading": "Grow your launch" },
        { "_type": "videoSection", "_key": "s2", "url": "https://example.com/v.mp4" },
        {
            "_type": "ctaSection",
            "_key": "s3",
            "heading": "Ready to start?",
            "primaryCTA": { "title": "Book a call", "href": "/contact" }
        }
    ]))
    .expect("valid sections fixture")
}
