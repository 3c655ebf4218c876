use std::env;

use serde::{Deserialize, Serialize};

/// Yahoo! JLP FuriganaService settings
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct FuriganaConfig {
    /// Application id, appended directly after `appid=`
    pub app_id: String,
    /// Service endpoint up to and including `appid=`
    pub request_url: String,
    /// XML tag carrying one reading
    pub reading_tag: String,
    /// XML tag marking a multi-word breakdown in the response
    pub subword_list_tag: String,
}

impl FuriganaConfig {
    pub fn new() -> Self {
        let app_id = env::var("RUBI_YAHOO_APP_ID").unwrap_or_default();

        Self {
            app_id,
            request_url: "https://jlp.yahooapis.jp/FuriganaService/V1/furigana?appid="
                .to_string(),
            reading_tag: "Furigana".to_string(),
            subword_list_tag: "SubWordList".to_string(),
        }
    }
}
