//! HTTP + WebSocket server and the game task behind it.

use crate::core::config::RunnerConfig;
use crate::core::constants::REALTIME_FRAME_MS;
use crate::input::press_action;
use crate::runner::{process_input, tick_runner, GameSnapshot, RunnerGame, RunnerInput, RunnerPhase};
use futures_util::{SinkExt, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_tungstenite::tungstenite::Message;

/// Channel carrying serialized snapshots to every connected client
pub type SnapshotSender = broadcast::Sender<String>;

/// Channel carrying client actions to the game task
pub type ActionSender = mpsc::Sender<ClientAction>;
pub type ActionReceiver = mpsc::Receiver<ClientAction>;

/// What a browser can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAction {
    Start,
    Jump,
    /// The single action key: start when not running, jump otherwise.
    Press,
}

impl ClientAction {
    pub fn to_input(self, phase: RunnerPhase) -> RunnerInput {
        match self {
            ClientAction::Start => RunnerInput::Start,
            ClientAction::Jump => RunnerInput::Jump,
            ClientAction::Press => press_action(phase),
        }
    }
}

#[derive(Deserialize)]
struct ClientMessage {
    action: ClientAction,
}

/// Parse a browser message, e.g. `{"action":"jump"}`.
pub fn parse_client_message(text: &str) -> Option<ClientAction> {
    serde_json::from_str::<ClientMessage>(text)
        .ok()
        .map(|message| message.action)
}

/// Channels shared between connections and the game task.
pub struct WebServer {
    pub snapshot_tx: SnapshotSender,
    pub action_tx: ActionSender,
}

impl WebServer {
    /// Create the channels and the receiving half for the game task.
    pub fn new() -> (Self, ActionReceiver) {
        let (snapshot_tx, _) = broadcast::channel(64);
        let (action_tx, action_rx) = mpsc::channel(100);
        (
            Self {
                snapshot_tx,
                action_tx,
            },
            action_rx,
        )
    }
}

/// Start the game task and accept connections on `port` until the
/// listener fails.
pub async fn start_web_server(port: u16, config: RunnerConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    let (server, action_rx) = WebServer::new();
    let server = Arc::new(server);
    tokio::spawn(run_game(config, server.snapshot_tx.clone(), action_rx));

    tracing::info!(port, "web server listening, open http://localhost:{}", port);

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let server = Arc::clone(&server);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, addr, server).await {
                        tracing::warn!(%addr, error = %e, "connection error");
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "accept error");
            }
        }
    }
}

/// Own the session: apply queued actions between cycles and step it on a
/// fixed interval, broadcasting a snapshot after every cycle.
async fn run_game(
    config: RunnerConfig,
    snapshot_tx: SnapshotSender,
    mut action_rx: ActionReceiver,
) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = RunnerGame::new(config);

    let epoch = Instant::now();
    let mut frames = tokio::time::interval(Duration::from_millis(REALTIME_FRAME_MS));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            action = action_rx.recv() => {
                let Some(action) = action else {
                    break;
                };
                let input = action.to_input(game.phase);
                process_input(&mut game, input, elapsed_ms(epoch));
            }
            _ = frames.tick() => {
                tick_runner(&mut game, elapsed_ms(epoch), &mut rng);
                if snapshot_tx.receiver_count() == 0 {
                    continue;
                }
                match GameSnapshot::capture(&game).to_json() {
                    Ok(json) => {
                        let _ = snapshot_tx.send(json);
                    }
                    Err(e) => tracing::warn!(error = %e, "snapshot serialization failed"),
                }
            }
        }
    }
    tracing::debug!("game task stopped");
}

fn elapsed_ms(epoch: Instant) -> f64 {
    epoch.elapsed().as_secs_f64() * 1000.0
}

/// Serve the page or upgrade to a WebSocket.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    server: Arc<WebServer>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut peek_buf = [0u8; 512];
    let n = stream.peek(&mut peek_buf).await?;
    let request = String::from_utf8_lossy(&peek_buf[..n]);

    let upgrade = request.to_ascii_lowercase().contains("upgrade: websocket");
    if request.starts_with("GET / ") && !upgrade {
        serve_html(stream).await?;
        return Ok(());
    }

    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    tracing::info!(%addr, "websocket connected");

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let mut snapshot_rx = server.snapshot_tx.subscribe();
    let action_tx = server.action_tx.clone();

    let send_task = tokio::spawn(async move {
        loop {
            match snapshot_rx.recv().await {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
            }
        }
    });

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match parse_client_message(&text) {
                Some(action) => {
                    if action_tx.send(action).await.is_err() {
                        break;
                    }
                }
                None => tracing::debug!(%addr, %text, "ignoring client message"),
            },
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }

    send_task.abort();
    tracing::info!(%addr, "websocket disconnected");

    Ok(())
}

async fn serve_html(mut stream: TcpStream) -> std::io::Result<()> {
    let html = include_str!("../../web/index.html");
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        html.len(),
        html
    );

    stream.write_all(response.as_bytes()).await?;
    Ok(())
}
