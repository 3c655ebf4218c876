use serde::{Deserialize, Serialize};

/// Which lookup a context-menu entry triggers. The serialized name doubles
/// as the wire id the browser side echoes back on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    Furigana,
    Kotobank,
    Weblio,
    Translate,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A context-menu entry was activated over a text selection.
    MenuActivated {
        mode: LookupMode,
        selection: String,
    },
}
