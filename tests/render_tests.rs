mod common;

use common::*;
use launchsite::models::Section;
use launchsite::render::{render_section, render_sections};
use serde_json::json;

#[test]
fn unknown_blocks_are_skipped_and_known_order_is_preserved() {
    let sections = seed_sections_with_unknown();
    let html = render_sections(&sections);

    let hero_at = html.find("Grow your launch").expect("hero rendered");
    let cta_at = html.find("Ready to start?").expect("cta rendered");
    assert!(hero_at < cta_at);
    assert!(!html.contains("videoSection"));
    assert!(!html.contains("v.mp4"));
}

#[test]
fn unknown_block_renders_nothing() {
    let section = Section::from_value(json!({ "_type": "videoSection", "_key": "v" }));
    assert!(render_section(&section).is_none());
}

#[test]
fn every_known_variant_renders() {
    let sections: Vec<Section> = serde_json::from_value(json!([
        { "_type": "heroSection", "_key": "a", "heading": "Hero" },
        {
            "_type": "featuresSection",
            "_key": "b",
            "heading": "Features",
            "features": [
                { "_key": "f1", "title": "Fast", "description": "Ships in days" },
                { "_key": "f2", "title": "Safe", "description": "No surprises" }
            ]
        },
        {
            "_type": "testimonialsSection",
            "_key": "c",
            "heading": "Testimonials",
            "testimonials": [
                { "_key": "t1", "quote": "Great", "author": "Sam" },
                { "_key": "t2", "quote": "Fine", "author": "Kim", "company": "Acme" }
            ]
        },
        { "_type": "ctaSection", "_key": "d", "heading": "CTA" },
        { "_type": "contactSection", "_key": "e" }
    ]))
    .unwrap();

    for section in &sections {
        let html = render_section(section).expect("known section renders");
        assert!(html.contains(&format!("data-key=\"{}\"", section.key())));
    }
}

#[test]
fn feature_items_carry_stagger_indices() {
    let section: Section = serde_json::from_value(json!({
        "_type": "featuresSection",
        "_key": "b",
        "heading": "Features",
        "features": [
            { "_key": "f1", "title": "Fast", "description": "Ships in days" },
            { "_key": "f2", "title": "Safe", "description": "No surprises" }
        ]
    }))
    .unwrap();

    let html = render_section(&section).unwrap();
    assert!(html.contains("data-stagger-index=\"0\""));
    assert!(html.contains("data-stagger-index=\"1\""));
}

#[test]
fn single_testimonial_has_no_carousel_controls() {
    let section: Section = serde_json::from_value(json!({
        "_type": "testimonialsSection",
        "_key": "c",
        "heading": "Testimonials",
        "testimonials": [
            { "_key": "t1", "quote": "Great", "author": "Sam" }
        ]
    }))
    .unwrap();

    let html = render_section(&section).unwrap();
    assert!(!html.contains("carousel-controls"));
}

#[test]
fn section_text_is_html_escaped() {
    let section = Section::from_value(json!({
        "_type": "heroSection",
        "_key": "a",
        "heading": "<script>alert(1)</script>"
    }));

    let html = render_section(&section).unwrap();
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}
