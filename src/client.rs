use std::sync::mpsc;

use log::{error, info, warn};

use crate::config::BoardLayout;
use crate::controls::ControlState;
use crate::event::{ClientEvent, EventError, ServerEvent};
use crate::game_log::LogEntry;
use crate::painter::{BoardRenderer, Frame};
use crate::snapshot::SnapshotError;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NotableEvent {
    None,
    // A new frame is available via `ClientState::frame`.
    FrameUpdated,
    // The snapshot was incomplete. The previous frame stays on screen, but the controls follow the
    // new snapshot.
    SnapshotSkipped(SnapshotError),
    // Append to the log region without a repaint.
    LogAppended(LogEntry),
    // Local reset: remove the winner overlay and leave everything else as is.
    WinnerOverlayCleared,
}

pub struct ClientState {
    events_tx: mpsc::Sender<ClientEvent>,
    renderer: BoardRenderer,
    frame: Option<Frame>,
    controls: ControlState,
}

impl ClientState {
    pub fn new(layout: BoardLayout, events_tx: mpsc::Sender<ClientEvent>) -> Self {
        ClientState {
            events_tx,
            renderer: BoardRenderer::new(layout),
            frame: None,
            controls: ControlState::initial(),
        }
    }

    pub fn renderer(&self) -> &BoardRenderer { &self.renderer }
    pub fn frame(&self) -> Option<&Frame> { self.frame.as_ref() }
    pub fn controls(&self) -> ControlState { self.controls }

    pub fn start_game(&mut self) { self.send(ClientEvent::StartGame); }
    pub fn next_phase(&mut self) { self.send(ClientEvent::NextPhase); }

    // The server answers with a fresh snapshot, but the overlay goes away right now.
    pub fn reset_game(&mut self) -> NotableEvent {
        self.send(ClientEvent::ResetGame);
        match &mut self.frame {
            Some(frame) if frame.winner_overlay.is_some() => {
                frame.winner_overlay = None;
                NotableEvent::WinnerOverlayCleared
            }
            _ => NotableEvent::None,
        }
    }

    pub fn process_server_event(&mut self, event: ServerEvent) -> NotableEvent {
        match event {
            ServerEvent::Connect => {
                info!("Connected to server");
                self.send(ClientEvent::RequestInitialState);
                NotableEvent::None
            }
            ServerEvent::Disconnect => {
                info!("Disconnected from server");
                NotableEvent::None
            }
            ServerEvent::Error { message } => {
                error!("Got error from server: {message}");
                NotableEvent::LogAppended(LogEntry::server_error(&message))
            }
            ServerEvent::GameStateUpdate(snapshot) => {
                self.controls = ControlState::from_snapshot(&snapshot);
                match self.renderer.paint(&snapshot) {
                    Ok(frame) => {
                        self.frame = Some(frame);
                        NotableEvent::FrameUpdated
                    }
                    Err(err) => {
                        warn!("Skipping game state update: {err}");
                        NotableEvent::SnapshotSkipped(err)
                    }
                }
            }
        }
    }

    // Entry point for hosts that receive raw channel messages. Malformed messages are dropped.
    pub fn process_wire_event(&mut self, name: &str, payload: Option<&str>) -> NotableEvent {
        match ServerEvent::parse(name, payload) {
            Ok(event) => self.process_server_event(event),
            Err(err @ EventError::UnknownEvent(_)) => {
                warn!("Ignoring server event: {err}");
                NotableEvent::None
            }
            Err(err) => {
                warn!("Dropping server event: {err}");
                NotableEvent::None
            }
        }
    }

    fn send(&self, event: ClientEvent) {
        if let Err(err) = self.events_tx.send(event) {
            error!("Cannot queue {}: {err}", event.name());
        }
    }
}
