use std::time::Duration;

use rubi_config::Config;
use rubi_types::LookupMode;
use tokio_util::sync::CancellationToken;

pub mod definition;
pub mod error;
pub mod furigana;

pub use error::LookupError;

use definition::Provider;

/// Typed outcome of one lookup: a string to show in the page popup, or a URL
/// the host should open in a new tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupAction {
    Display(String),
    OpenTab(String),
}

/// Issues provider requests and extracts the display string.
///
/// One invocation of [`Dispatcher::lookup`] makes at most one HTTP request
/// and owns it exclusively; translate mode makes none.
pub struct Dispatcher {
    client: reqwest::Client,
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.network.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Single-shot lookup for one menu activation.
    pub async fn lookup(
        &self,
        selection: &str,
        mode: LookupMode,
        cancel: &CancellationToken,
    ) -> Result<LookupAction, LookupError> {
        match mode {
            LookupMode::Translate => {
                // No network here: the host navigates a fresh tab instead.
                let url = format!("{}{}", self.config.translate.request_url, selection);
                Ok(LookupAction::OpenTab(url))
            }
            LookupMode::Furigana => {
                let url = furigana::request_url(&self.config.furigana, selection);
                let body = self.fetch(&url, cancel).await?;
                let reading = furigana::extract_reading(&body, &self.config.furigana)?;
                Ok(LookupAction::Display(reading))
            }
            LookupMode::Kotobank => self.definition(Provider::Kotobank, selection, cancel).await,
            LookupMode::Weblio => self.definition(Provider::Weblio, selection, cancel).await,
        }
    }

    async fn definition(
        &self,
        provider: Provider,
        selection: &str,
        cancel: &CancellationToken,
    ) -> Result<LookupAction, LookupError> {
        let url = definition::request_url(provider, &self.config.dictionary, selection);
        let body = self.fetch(&url, cancel).await?;
        let markup = definition::extract(provider, &self.config.dictionary, &body)?;
        Ok(LookupAction::Display(markup))
    }

    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String, LookupError> {
        tracing::debug!("GET {url}");

        let request = async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }
            Ok(response.text().await?)
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(LookupError::Cancelled),
            result = request => result,
        }
    }
}
