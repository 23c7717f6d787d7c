//! Device bridge over WebSocket.
//!
//! A connection negotiates a mode from the query string once, then loops
//! over inbound frames. In `handshake` mode every binary frame is answered
//! with the fixed device identification reply; in `raw` mode binary frames
//! are echoed back verbatim. Any other frame type ends the session.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::RuntimeConfig;

/// Identification reply sent to devices in handshake mode: the ASCII
/// string followed by a single NUL byte.
pub const HANDSHAKE_REPLY: &[u8] = b"GM:Studio-Connect\0";

/// Connection mode, fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BridgeMode {
    /// Echo binary frames back verbatim.
    #[default]
    Raw,
    /// Answer binary frames with [`HANDSHAKE_REPLY`].
    Handshake,
}

impl BridgeMode {
    /// Absent, empty, and unrecognized values all fall back to raw.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("handshake") => Self::Handshake,
            _ => Self::Raw,
        }
    }
}

/// What the session loop should do with one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeAction {
    /// Send a binary reply and keep reading.
    Reply(Vec<u8>),
    /// Ignore the frame and keep reading.
    Continue,
    /// Close frame observed; end the loop without replying.
    Terminate,
    /// Unexpected frame type; end the loop without replying.
    ProtocolViolation,
}

/// Per-connection session state.
#[derive(Debug)]
pub struct BridgeSession {
    mode: BridgeMode,
    /// Set after the first handshake reply. Deliberately never gates the
    /// reply: devices re-send the opening frame when they reconnect
    /// mid-exchange and expect the identification string every time.
    handshake_completed: bool,
}

impl BridgeSession {
    pub fn new(mode: BridgeMode) -> Self {
        Self {
            mode,
            handshake_completed: false,
        }
    }

    pub fn mode(&self) -> BridgeMode {
        self.mode
    }

    pub fn handshake_completed(&self) -> bool {
        self.handshake_completed
    }

    /// Advance the session with one inbound frame.
    pub fn dispatch(&mut self, frame: &Message) -> BridgeAction {
        match frame {
            Message::Binary(data) => match self.mode {
                BridgeMode::Handshake => {
                    self.handshake_completed = true;
                    BridgeAction::Reply(HANDSHAKE_REPLY.to_vec())
                }
                BridgeMode::Raw => BridgeAction::Reply(data.clone()),
            },
            Message::Close(_) => BridgeAction::Terminate,
            // The transport answers pings itself; these frames carry no
            // session-level meaning.
            Message::Ping(_) | Message::Pong(_) => BridgeAction::Continue,
            Message::Text(_) => BridgeAction::ProtocolViolation,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct BridgeParams {
    mode: Option<String>,
}

pub(super) async fn connect(
    ws: WebSocketUpgrade,
    Query(params): Query<BridgeParams>,
    State(config): State<Arc<RuntimeConfig>>,
) -> Response {
    let mode = BridgeMode::from_query(params.mode.as_deref());
    // 0 disables the message size limit.
    let limit = config.max_ws_payload;
    let ws = if limit == 0 {
        ws.max_message_size(usize::MAX).max_frame_size(usize::MAX)
    } else {
        ws.max_message_size(limit)
    };
    info!(?mode, "new websocket connection");
    ws.on_upgrade(move |socket| run_session(socket, mode))
}

async fn run_session(mut socket: WebSocket, mode: BridgeMode) {
    let mut session = BridgeSession::new(mode);

    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(err) => {
                // Transport-level error; keep reading until the stream
                // itself ends.
                warn!(error = %err, "websocket error");
                continue;
            }
        };

        match session.dispatch(&frame) {
            BridgeAction::Reply(data) => {
                if socket.send(Message::Binary(data)).await.is_err() {
                    break;
                }
            }
            BridgeAction::Continue => {}
            BridgeAction::Terminate => {
                debug!("close frame received");
                break;
            }
            BridgeAction::ProtocolViolation => {
                warn!("unexpected frame type, terminating connection");
                break;
            }
        }
    }

    debug!(?mode, "websocket session ended");
}
