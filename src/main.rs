mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use launchsite::cms::CmsClient;
use launchsite::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let cms = CmsClient::new(config.cms.clone());
    let bind_addr = config.bind_addr.clone();

    let state = Data::new(web::state::AppState::new(config, Arc::new(cms)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(web::routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
