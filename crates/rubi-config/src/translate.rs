use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Translation page the selection is appended to
    pub request_url: String,
}

impl TranslateConfig {
    pub fn new() -> Self {
        Self {
            request_url: "https://translate.google.co.jp/#ja/en/".to_string(),
        }
    }
}
