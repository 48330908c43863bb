use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Content store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Content store returned status {0}")]
    Status(u16),

    #[error("Failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Write to the content store requires an API token")]
    MissingToken,
}
