#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("malformed reading response: {0}")]
    Xml(String),

    #[error("invalid content selector `.{0}`")]
    Selector(String),

    #[error("no content extracted from {provider}")]
    NoContent { provider: &'static str },

    #[error("lookup cancelled")]
    Cancelled,
}
