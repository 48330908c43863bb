pub mod schema;
pub mod sitemap;
