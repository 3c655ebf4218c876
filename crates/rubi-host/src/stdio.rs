//! Native-messaging transport: each message is a 32-bit little-endian length
//! followed by that many bytes of JSON. Commands go out on stdout, menu
//! activations come in on stdin, so diagnostics must never touch stdout.

use kanal::AsyncSender;
use rubi_types::AppEvent;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::{Host, HostError, MenuEntry};

/// Outbound message to the browser side.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    RegisterMenus { entries: Vec<MenuEntry> },
    RunInPage { script: String },
    OpenTab { url: String },
}

/// Inbound message from the browser side.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Menu {
        entry: rubi_types::LookupMode,
        selection: String,
    },
}

/// Read one length-prefixed message. `None` means the peer closed the
/// channel between messages.
pub async fn read_message<R, T>(reader: &mut R) -> Result<Option<T>, HostError>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }

    let mut payload = vec![0u8; u32::from_le_bytes(len_buf) as usize];
    reader.read_exact(&mut payload).await?;
    Ok(Some(serde_json::from_slice(&payload)?))
}

/// Write one length-prefixed message.
pub async fn write_message<W, T>(writer: &mut W, message: &T) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let payload = serde_json::to_vec(message)?;
    writer
        .write_all(&(payload.len() as u32).to_le_bytes())
        .await?;
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Browser host reached over the process's own stdin/stdout.
pub struct StdioHost {
    stdout: Mutex<tokio::io::Stdout>,
}

impl StdioHost {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }

    async fn send(&self, command: &Command) -> Result<(), HostError> {
        let mut stdout = self.stdout.lock().await;
        write_message(&mut *stdout, command).await
    }
}

impl Default for StdioHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Host for StdioHost {
    async fn run_in_page(&self, script: &str) -> Result<(), HostError> {
        self.send(&Command::RunInPage {
            script: script.to_string(),
        })
        .await
    }

    async fn open_tab(&self, url: &str) -> Result<(), HostError> {
        self.send(&Command::OpenTab {
            url: url.to_string(),
        })
        .await
    }

    async fn register_menus(&self, entries: &[MenuEntry]) -> Result<(), HostError> {
        self.send(&Command::RegisterMenus {
            entries: entries.to_vec(),
        })
        .await
    }
}

/// Forward menu activations from stdin into the app channel until the peer
/// closes the channel or shutdown is requested.
pub async fn listen_events(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> Result<(), HostError> {
    forward_events(tokio::io::stdin(), event_tx, cancel).await
}

pub async fn forward_events<R>(
    mut reader: R,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> Result<(), HostError>
where
    R: AsyncRead + Unpin,
{
    loop {
        let message = tokio::select! {
            _ = cancel.cancelled() => break,
            message = read_message::<_, HostEvent>(&mut reader) => message,
        };

        match message {
            Ok(None) => {
                tracing::info!("Host channel closed");
                break;
            }
            Ok(Some(HostEvent::Menu { entry, selection })) => {
                let event = AppEvent::MenuActivated {
                    mode: entry,
                    selection,
                };
                if event_tx.send(event).await.is_err() {
                    break;
                }
            }
            // A malformed frame from the peer is dropped, not fatal.
            Err(HostError::Codec(e)) => tracing::warn!("Ignoring malformed host message: {e}"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
