use std::sync::Arc;

use rubi_config::Config;
use rubi_host::Host;
use rubi_host::stdio::StdioHost;
use tokio::signal;

mod controller;
mod events;
mod state;
#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let state = Arc::new(AppState::new(Config::new()));
    let controller = AppController::new(state);

    let host: Arc<dyn Host> = Arc::new(StdioHost::new());
    let mut tasks = controller.spawn_tasks(host);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}

    Ok(())
}

/// Logs go to stderr; stdout carries the host message channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if atty::is(atty::Stream::Stderr) {
        builder.init();
    } else {
        builder.json().init();
    }
}
