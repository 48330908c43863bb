pub mod cms;
pub mod common;
pub mod config;
pub mod models;
pub mod render;
pub mod seo;
pub mod ui;
