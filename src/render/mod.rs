//! Maps content blocks to their HTML views.
//!
//! Dispatch is exhaustive over the block enum with a single designated
//! fallback: unknown block types log a warning and render nothing, so one
//! unrecognized section can never abort a page render.

use askama::Template;

use crate::models::{
    ContactSection, CtaSection, FeaturesSection, HeroSection, Section, TestimonialsSection,
};

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate<'a> {
    section: &'a HeroSection,
}

#[derive(Template)]
#[template(path = "sections/features.html")]
struct FeaturesTemplate<'a> {
    section: &'a FeaturesSection,
}

#[derive(Template)]
#[template(path = "sections/testimonials.html")]
struct TestimonialsTemplate<'a> {
    section: &'a TestimonialsSection,
}

#[derive(Template)]
#[template(path = "sections/cta.html")]
struct CtaTemplate<'a> {
    section: &'a CtaSection,
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
struct ContactTemplate<'a> {
    section: &'a ContactSection,
}

/// Renders one block, or nothing for the unknown fallback. A template
/// failure on a known block is also soft: the block is dropped and the
/// rest of the page renders.
pub fn render_section(section: &Section) -> Option<String> {
    let rendered = match section {
        Section::Hero(s) => HeroTemplate { section: s }.render(),
        Section::Features(s) => FeaturesTemplate { section: s }.render(),
        Section::Testimonials(s) => TestimonialsTemplate { section: s }.render(),
        Section::Cta(s) => CtaTemplate { section: s }.render(),
        Section::Contact(s) => ContactTemplate { section: s }.render(),
        Section::Unknown { kind, key } => {
            log::warn!("Skipping unknown section type {kind:?} (key {key:?})");
            return None;
        }
    };

    match rendered {
        Ok(html) => Some(html),
        Err(e) => {
            log::error!("Failed to render {} section: {e}", section.kind());
            None
        }
    }
}

/// Renders every known block in stored order.
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .filter_map(render_section)
        .collect::<Vec<_>>()
        .join("\n")
}
