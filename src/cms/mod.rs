mod client;
pub mod query;
mod source;

pub use client::CmsClient;
pub use source::ContentSource;
