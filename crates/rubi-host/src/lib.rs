use rubi_types::LookupMode;
use serde::{Deserialize, Serialize};

pub mod stdio;

/// A selection-context menu entry offered to the browser side. Activations
/// come back carrying the entry's mode and the selected text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: LookupMode,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed host message: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Capabilities the browser side provides to this process.
#[async_trait::async_trait]
pub trait Host: Send + Sync {
    /// Run a script payload inside the currently active page.
    async fn run_in_page(&self, script: &str) -> Result<(), HostError>;

    /// Open a URL in a new browser tab.
    async fn open_tab(&self, url: &str) -> Result<(), HostError>;

    /// Register selection-context menu entries.
    async fn register_menus(&self, entries: &[MenuEntry]) -> Result<(), HostError>;
}
