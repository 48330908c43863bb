use actix_web::web;

use crate::web::handlers;

/// Registers all routes. The slug catch-all must come last so fixed paths
/// (API, sitemap, robots) win.
pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::revalidate::configure(cfg);
    handlers::contact::configure(cfg);
    handlers::sitemap::configure(cfg);
    handlers::pages::configure(cfg);
}
