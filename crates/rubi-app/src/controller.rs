use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use rubi_host::Host;
use rubi_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub host_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            host_to_app: kanal::bounded_async(64), // menu activations
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, host: Arc<dyn Host>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            host,
            self.channels.host_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Host listener
        let event_tx = self.channels.host_to_app.0.clone();
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            rubi_host::stdio::listen_events(event_tx, cancel)
                .await
                .map_err(anyhow::Error::from)
        });

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
