use actix_web::{get, web, HttpResponse, Responder};
use askama::Template;

use launchsite::models::{Page, SiteSettings};
use launchsite::render::render_sections;
use launchsite::seo::schema::{schema_graph, Breadcrumb, SchemaKind, SchemaRequest};

use crate::web::state::AppState;
use crate::web::templates::{NotFoundTemplate, PageTemplate};

pub const HOME_SLUG: &str = "home";

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    serve_page(&state, HOME_SLUG, "/").await
}

#[get("/{slug}")]
pub async fn page(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    let request_path = format!("/{slug}");
    serve_page(&state, &slug, &request_path).await
}

fn breadcrumb_trail(slug: &str, doc: &Page) -> Vec<Breadcrumb> {
    if slug == HOME_SLUG {
        return Vec::new();
    }
    vec![
        Breadcrumb {
            name: "Home".to_string(),
            url: "/".to_string(),
        },
        Breadcrumb {
            name: doc.title.clone(),
            url: format!("/{slug}"),
        },
    ]
}

fn build_page_template(
    state: &AppState,
    slug: &str,
    request_path: &str,
    doc: &Page,
    settings: Option<&SiteSettings>,
) -> PageTemplate {
    let seo = doc.seo.as_ref();
    let title = seo
        .and_then(|s| s.meta_title.clone())
        .unwrap_or_else(|| doc.title.clone());
    let description = seo.and_then(|s| s.meta_description.clone());
    let og_image = seo
        .and_then(|s| s.open_graph_image.as_ref())
        .map(|i| i.url.clone());

    let breadcrumbs = breadcrumb_trail(slug, doc);
    let graph = schema_graph(
        &state.config.base_url,
        SchemaKind::All,
        &SchemaRequest {
            settings,
            breadcrumbs: &breadcrumbs,
            article: None,
        },
    );
    let schema_json = if graph.is_empty() {
        None
    } else {
        serde_json::to_string(&graph).ok()
    };

    let site_name = settings
        .and_then(|s| s.site_name.clone())
        .unwrap_or_else(|| state.config.site_name.clone());

    let canonical_url = if request_path == "/" {
        state.config.base_url.clone()
    } else {
        format!("{}{}", state.config.base_url, request_path)
    };

    PageTemplate {
        title,
        description,
        og_image,
        canonical_url,
        schema_json,
        site_name,
        main_navigation: settings
            .map(|s| s.main_navigation.clone())
            .unwrap_or_default(),
        footer_navigation: settings
            .map(|s| s.footer_navigation.clone())
            .unwrap_or_default(),
        social_links: settings.map(|s| s.social_links.clone()).unwrap_or_default(),
        sections_html: render_sections(&doc.sections),
    }
}

fn not_found(state: &AppState) -> HttpResponse {
    let body = NotFoundTemplate {
        site_name: state.config.site_name.clone(),
    }
    .render()
    .unwrap_or_else(|_| "Not found".to_string());

    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

async fn serve_page(state: &AppState, slug: &str, request_path: &str) -> HttpResponse {
    if let Some(html) = state.cache.get(request_path) {
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html);
    }

    let doc = match state.cms.page_by_slug(slug).await {
        Ok(Some(doc)) => doc,
        Ok(None) => return not_found(state),
        Err(e) => {
            log::error!("Failed to fetch page {slug:?}: {e}");
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Something went wrong. Please try again later.");
        }
    };

    // Navigation and footer degrade gracefully when the settings document
    // cannot be fetched; the page itself still renders.
    let settings = match state.cms.site_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to fetch site settings: {e}");
            None
        }
    };

    let template = build_page_template(state, slug, request_path, &doc, settings.as_ref());
    match template.render() {
        Ok(html) => {
            state.cache.insert(request_path, html.clone());
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }
        Err(e) => {
            log::error!("Failed to render page {slug:?}: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Something went wrong. Please try again later.")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(page);
}
