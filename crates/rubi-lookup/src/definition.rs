use rubi_config::dictionary::DictionaryConfig;
use scraper::{Html, Selector};

use crate::error::LookupError;

/// The two fixed definition sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Kotobank,
    Weblio,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::Kotobank => "kotobank",
            Provider::Weblio => "weblio",
        }
    }

    fn base_url(self, config: &DictionaryConfig) -> &str {
        match self {
            Provider::Kotobank => &config.kotobank_url,
            Provider::Weblio => &config.weblio_url,
        }
    }

    fn content_class(self, config: &DictionaryConfig) -> &str {
        match self {
            Provider::Kotobank => &config.kotobank_class,
            Provider::Weblio => &config.weblio_class,
        }
    }
}

/// Entry-page URL for a provider. The selection is appended verbatim.
pub fn request_url(provider: Provider, config: &DictionaryConfig, selection: &str) -> String {
    format!("{}{}", provider.base_url(config), selection)
}

/// Pull the definition block's inner markup out of a provider page.
pub fn extract(
    provider: Provider,
    config: &DictionaryConfig,
    html: &str,
) -> Result<String, LookupError> {
    let class = provider.content_class(config);
    let selector = Selector::parse(&format!(".{class}"))
        .map_err(|_| LookupError::Selector(class.to_string()))?;

    let document = Html::parse_document(html);
    let matches: Vec<_> = document.select(&selector).collect();

    // Kotobank's first `description` block is the page header, not the entry
    // body; when an entry body follows, take that instead. Weblio pages put
    // the entry first.
    let index = match provider {
        Provider::Kotobank if matches.len() > 1 => 1,
        _ => 0,
    };

    matches
        .get(index)
        .map(|element| element.inner_html())
        .ok_or(LookupError::NoContent {
            provider: provider.name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DictionaryConfig {
        DictionaryConfig::new()
    }

    #[test]
    fn request_url_appends_selection_verbatim() {
        assert_eq!(
            request_url(Provider::Kotobank, &config(), "猫"),
            "https://kotobank.jp/word/猫"
        );
        assert_eq!(
            request_url(Provider::Weblio, &config(), "犬 猫"),
            "http://www.weblio.jp/content/犬 猫"
        );
    }

    #[test]
    fn kotobank_skips_the_header_block() {
        let html = "<html><body>\
            <div class=\"description\">site header</div>\
            <div class=\"description\"><p>entry body</p></div>\
            </body></html>";
        assert_eq!(
            extract(Provider::Kotobank, &config(), html).unwrap(),
            "<p>entry body</p>"
        );
    }

    #[test]
    fn kotobank_single_block_is_taken_as_is() {
        let html = "<html><body>\
            <div class=\"description\"><p>only block</p></div>\
            </body></html>";
        assert_eq!(
            extract(Provider::Kotobank, &config(), html).unwrap(),
            "<p>only block</p>"
        );
    }

    #[test]
    fn weblio_takes_the_first_block() {
        let html = "<html><body>\
            <div class=\"kiji\"><p>first</p></div>\
            <div class=\"kiji\"><p>second</p></div>\
            </body></html>";
        assert_eq!(
            extract(Provider::Weblio, &config(), html).unwrap(),
            "<p>first</p>"
        );
    }

    #[test]
    fn missing_content_block_is_no_content() {
        let html = "<html><body><div class=\"unrelated\">x</div></body></html>";
        assert!(matches!(
            extract(Provider::Weblio, &config(), html),
            Err(LookupError::NoContent { provider: "weblio" })
        ));
    }

    #[test]
    fn inner_markup_is_returned_verbatim() {
        let html = "<html><body>\
            <div class=\"kiji\">text <a href=\"/w/x\">link</a> tail</div>\
            </body></html>";
        assert_eq!(
            extract(Provider::Weblio, &config(), html).unwrap(),
            "text <a href=\"/w/x\">link</a> tail"
        );
    }
}
