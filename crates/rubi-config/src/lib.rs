use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::furigana::FuriganaConfig;
use self::network::NetworkConfig;
use self::translate::TranslateConfig;

pub mod dictionary;
pub mod furigana;
pub mod network;
pub mod translate;

/// Provider settings, fixed at startup and passed by value to the parts that
/// need them.
#[derive(Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub furigana: FuriganaConfig,
    pub dictionary: DictionaryConfig,
    pub translate: TranslateConfig,
    pub network: NetworkConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            furigana: FuriganaConfig::new(),
            dictionary: DictionaryConfig::new(),
            translate: TranslateConfig::new(),
            network: NetworkConfig::new(),
        }
    }
}
