use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use launchsite::seo::sitemap::{robots_txt, sitemap_entries, to_xml};

use crate::web::state::AppState;

#[get("/sitemap.xml")]
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    let slugs = match state.cms.all_page_slugs().await {
        Ok(slugs) => slugs,
        Err(e) => {
            // The static entries still make a valid sitemap.
            log::error!("Failed to fetch page slugs for sitemap: {e}");
            Vec::new()
        }
    };

    let entries = sitemap_entries(&state.config.base_url, Utc::now(), &slugs);
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(to_xml(&entries))
}

#[get("/robots.txt")]
pub async fn robots(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(robots_txt(&state.config.base_url))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sitemap).service(robots);
}
