use std::sync::Arc;

use kanal::AsyncReceiver;
use rubi_host::{Host, MenuEntry};
use rubi_lookup::{Dispatcher, LookupAction};
use rubi_types::{AppEvent, LookupMode};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Context-menu entries offered on any text selection.
pub fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            id: LookupMode::Furigana,
            title: "ふりがなを見る".to_string(),
        },
        MenuEntry {
            id: LookupMode::Weblio,
            title: "意味を見る".to_string(),
        },
        MenuEntry {
            id: LookupMode::Kotobank,
            title: "意味を見る（コトバンク）".to_string(),
        },
        MenuEntry {
            id: LookupMode::Translate,
            title: "Google Translateで開く".to_string(),
        },
    ]
}

/// App's main loop: one lookup per menu activation.
pub async fn event_loop(
    state: Arc<AppState>,
    host: Arc<dyn Host>,
    host_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(state.config.clone())?;

    host.register_menus(&menu_entries()).await?;
    tracing::info!("Menu entries registered, waiting for activations");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = host_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::MenuActivated { mode, selection } => {
                handle_menu_activation(&dispatcher, host.as_ref(), mode, selection, &cancel)
                    .await;
            }
        }
    }

    Ok(())
}

async fn handle_menu_activation(
    dispatcher: &Dispatcher,
    host: &dyn Host,
    mode: LookupMode,
    selection: String,
    cancel: &CancellationToken,
) {
    tracing::debug!(
        "{mode:?} lookup for a {}-char selection",
        selection.chars().count()
    );

    match dispatcher.lookup(&selection, mode, cancel).await {
        Ok(LookupAction::Display(result)) => {
            let script = rubi_view::compile(&rubi_view::popup(&result));
            if let Err(e) = host.run_in_page(&script).await {
                tracing::error!("Failed to inject popup: {e}");
            }
        }
        Ok(LookupAction::OpenTab(url)) => {
            if let Err(e) = host.open_tab(&url).await {
                tracing::error!("Failed to open tab: {e}");
            }
        }
        // Nothing is shown in the page on failure; the popup simply does
        // not appear.
        Err(e) => tracing::warn!("{mode:?} lookup failed: {e}"),
    }
}
