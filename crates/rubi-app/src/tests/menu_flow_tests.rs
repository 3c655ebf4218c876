use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rubi_config::Config;
use rubi_host::{Host, HostError, MenuEntry};
use rubi_types::{AppEvent, LookupMode};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::{event_loop, menu_entries};
use crate::state::AppState;

#[derive(Default)]
struct RecordingHost {
    scripts: Mutex<Vec<String>>,
    tabs: Mutex<Vec<String>>,
    menus: Mutex<Vec<MenuEntry>>,
}

#[async_trait]
impl Host for RecordingHost {
    async fn run_in_page(&self, script: &str) -> Result<(), HostError> {
        self.scripts.lock().unwrap().push(script.to_string());
        Ok(())
    }

    async fn open_tab(&self, url: &str) -> Result<(), HostError> {
        self.tabs.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn register_menus(&self, entries: &[MenuEntry]) -> Result<(), HostError> {
        self.menus.lock().unwrap().extend(entries.to_vec());
        Ok(())
    }
}

fn test_config() -> Config {
    let mut config = Config::new();
    config.network.timeout_seconds = 5;
    config
}

async fn wait_until(mut ready: impl FnMut() -> bool) {
    timeout(Duration::from_secs(2), async {
        while !ready() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn all_four_menu_entries_are_registered_on_startup() {
    let state = Arc::new(AppState::new(test_config()));
    let host = Arc::new(RecordingHost::default());
    let (_tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();

    let task = tokio::spawn(event_loop(state, host.clone(), rx, cancel.clone()));

    wait_until(|| host.menus.lock().unwrap().len() == 4).await;

    let registered = host.menus.lock().unwrap().clone();
    assert_eq!(registered, menu_entries());
    assert_eq!(registered[0].title, "ふりがなを見る");

    cancel.cancel();
    timeout(Duration::from_secs(2), task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn translate_activation_opens_a_tab_and_injects_nothing() {
    let state = Arc::new(AppState::new(test_config()));
    let host = Arc::new(RecordingHost::default());
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();

    let task = tokio::spawn(event_loop(state, host.clone(), rx, cancel.clone()));

    tx.send(AppEvent::MenuActivated {
        mode: LookupMode::Translate,
        selection: "猫".to_string(),
    })
    .await
    .unwrap();

    wait_until(|| !host.tabs.lock().unwrap().is_empty()).await;

    assert_eq!(
        host.tabs.lock().unwrap().as_slice(),
        ["https://translate.google.co.jp/#ja/en/猫"]
    );
    assert!(host.scripts.lock().unwrap().is_empty());

    cancel.cancel();
    timeout(Duration::from_secs(2), task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn failed_lookup_shows_no_popup_and_keeps_the_loop_alive() {
    let mut config = test_config();
    // Request construction fails before any socket is opened.
    config.furigana.request_url = "::not-a-url::".to_string();
    let state = Arc::new(AppState::new(config));
    let host = Arc::new(RecordingHost::default());
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    let cancel = CancellationToken::new();

    let task = tokio::spawn(event_loop(state, host.clone(), rx, cancel.clone()));

    tx.send(AppEvent::MenuActivated {
        mode: LookupMode::Furigana,
        selection: "猫".to_string(),
    })
    .await
    .unwrap();
    tx.send(AppEvent::MenuActivated {
        mode: LookupMode::Translate,
        selection: "猫".to_string(),
    })
    .await
    .unwrap();

    // Activations are handled in order, so once the tab shows up the failed
    // furigana lookup has already come and gone.
    wait_until(|| !host.tabs.lock().unwrap().is_empty()).await;
    assert!(host.scripts.lock().unwrap().is_empty());

    cancel.cancel();
    timeout(Duration::from_secs(2), task)
        .await
        .expect("event loop did not stop")
        .unwrap()
        .unwrap();
}
