use serde::{Deserialize, Serialize};

/// Scrape targets for the two definition sites
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub kotobank_url: String,
    /// Class of the content block on a Kotobank entry page
    pub kotobank_class: String,
    pub weblio_url: String,
    /// Class of the content block on a Weblio entry page
    pub weblio_class: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            kotobank_url: "https://kotobank.jp/word/".to_string(),
            kotobank_class: "description".to_string(),
            weblio_url: "http://www.weblio.jp/content/".to_string(),
            weblio_class: "kiji".to_string(),
        }
    }
}
