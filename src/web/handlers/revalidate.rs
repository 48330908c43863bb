use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::web::cache::PageCache;
use crate::web::state::AppState;

const SECRET_HEADER: &str = "x-webhook-secret";

/// Content-change notification from the authoring backend.
#[derive(Debug, Deserialize)]
pub struct WebhookBody {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub slug: Option<SlugRef>,
}

#[derive(Debug, Deserialize)]
pub struct SlugRef {
    #[serde(default)]
    pub current: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revalidated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What a change notification invalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    Paths(Vec<String>),
    /// Settings feed the navigation and footer on every page.
    All,
    /// Document types without a policy are acknowledged and ignored.
    None,
}

/// Pure policy: maps a changed document to the set of stale paths.
pub fn invalidation_for(body: &WebhookBody) -> Invalidation {
    match body.kind.as_deref() {
        Some("page") => {
            if body.id.as_deref() == Some("home") {
                return Invalidation::Paths(vec!["/".to_string()]);
            }
            let mut paths = Vec::new();
            if let Some(slug) = body.slug.as_ref().and_then(|s| s.current.as_deref()) {
                paths.push(format!("/{slug}"));
            }
            paths.push("/".to_string());
            Invalidation::Paths(paths)
        }
        Some("siteSettings") => Invalidation::All,
        _ => Invalidation::None,
    }
}

fn apply(cache: &PageCache, invalidation: &Invalidation) {
    match invalidation {
        Invalidation::Paths(paths) => {
            for path in paths {
                cache.invalidate(path);
            }
        }
        Invalidation::All => {
            cache.invalidate_all();
        }
        Invalidation::None => {}
    }
}

#[post("/api/revalidate")]
pub async fn revalidate(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let supplied = req
        .headers()
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok());
    let expected = state.config.revalidate_secret.as_deref();

    let authorized = matches!((supplied, expected), (Some(s), Some(e)) if s == e);
    if !authorized {
        return HttpResponse::Unauthorized().json(WebhookAck {
            success: false,
            revalidated: None,
            message: Some("Invalid secret".to_string()),
        });
    }

    let body: WebhookBody = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Error revalidating: malformed webhook body: {e}");
            return HttpResponse::InternalServerError().json(WebhookAck {
                success: false,
                revalidated: None,
                message: Some("Error revalidating".to_string()),
            });
        }
    };

    let invalidation = invalidation_for(&body);
    apply(&state.cache, &invalidation);
    log::info!(
        "Revalidated for document type {:?} id {:?}: {:?}",
        body.kind,
        body.id,
        invalidation
    );

    HttpResponse::Ok().json(WebhookAck {
        success: true,
        revalidated: Some(true),
        message: None,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(revalidate);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::web::Data;
    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::web::handlers::testutil::{test_config, FakeSource};
    use crate::web::state::AppState;

    fn seeded_state(secret: Option<&str>) -> Data<AppState> {
        let state = AppState::new(test_config(secret), Arc::new(FakeSource::default()));
        state.cache.insert("/", "home html");
        state.cache.insert("/about", "about html");
        state.cache.insert("/pricing", "pricing html");
        Data::new(state)
    }

    #[test]
    async fn home_page_change_invalidates_root_only() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "s3cret"))
            .set_json(json!({ "_type": "page", "_id": "home" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(!state.cache.contains("/"));
        assert!(state.cache.contains("/about"));
        assert!(state.cache.contains("/pricing"));
    }

    #[test]
    async fn other_page_change_invalidates_its_path_and_root() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "s3cret"))
            .set_json(json!({
                "_type": "page",
                "_id": "page-about",
                "slug": { "current": "about" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(!state.cache.contains("/"));
        assert!(!state.cache.contains("/about"));
        assert!(state.cache.contains("/pricing"));
    }

    #[test]
    async fn settings_change_invalidates_everything() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "s3cret"))
            .set_json(json!({ "_type": "siteSettings", "_id": "siteSettings" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(state.cache.is_empty());
    }

    #[test]
    async fn wrong_secret_is_rejected_with_zero_invalidations() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "wrong"))
            .set_json(json!({ "_type": "siteSettings" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        assert_eq!(state.cache.len(), 3);
    }

    #[test]
    async fn missing_configured_secret_rejects_everything() {
        let state = seeded_state(None);
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, ""))
            .set_json(json!({ "_type": "page", "_id": "home" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
        assert_eq!(state.cache.len(), 3);
    }

    #[test]
    async fn unhandled_document_type_is_a_successful_no_op() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "s3cret"))
            .set_json(json!({ "_type": "author", "_id": "author-1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(state.cache.len(), 3);
    }

    #[test]
    async fn malformed_body_reports_a_generic_server_error() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        let req = test::TestRequest::post()
            .uri("/api/revalidate")
            .insert_header((SECRET_HEADER, "s3cret"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);
        assert_eq!(state.cache.len(), 3);
    }

    #[test]
    async fn repeated_delivery_produces_the_same_invalidation_set() {
        let state = seeded_state(Some("s3cret"));
        let app =
            test::init_service(App::new().app_data(state.clone()).service(revalidate)).await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/revalidate")
                .insert_header((SECRET_HEADER, "s3cret"))
                .set_json(json!({
                    "_type": "page",
                    "_id": "page-about",
                    "slug": { "current": "about" }
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        assert!(!state.cache.contains("/about"));
        assert!(!state.cache.contains("/"));
        assert!(state.cache.contains("/pricing"));
    }

    #[test]
    async fn policy_table_for_page_without_slug_still_touches_root() {
        let body = WebhookBody {
            id: Some("page-x".to_string()),
            kind: Some("page".to_string()),
            slug: None,
        };
        assert_eq!(
            invalidation_for(&body),
            Invalidation::Paths(vec!["/".to_string()])
        );
    }
}
