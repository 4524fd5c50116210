mod common;

use std::sync::mpsc;

use pretty_assertions::assert_eq;
use tianji_board::client::{ClientState, NotableEvent};
use tianji_board::config::BoardLayout;
use tianji_board::controls::ControlState;
use tianji_board::event::{ClientEvent, ServerEvent};
use tianji_board::game_log::{LogCategory, LogEntry};
use tianji_board::snapshot::{GameSnapshot, SnapshotError, Winner};

use common::*;


fn new_client() -> (ClientState, mpsc::Receiver<ClientEvent>) {
    let (events_tx, events_rx) = mpsc::channel();
    (ClientState::new(BoardLayout::default(), events_tx), events_rx)
}

fn update(client: &mut ClientState, snapshot: GameSnapshot) -> NotableEvent {
    client.process_server_event(ServerEvent::GameStateUpdate(snapshot))
}

#[test]
fn connect_requests_initial_state() {
    let (mut client, events_rx) = new_client();
    assert_eq!(client.process_server_event(ServerEvent::Connect), NotableEvent::None);
    assert_eq!(events_rx.try_iter().collect::<Vec<_>>(), [ClientEvent::RequestInitialState]);
    assert_eq!(client.process_server_event(ServerEvent::Disconnect), NotableEvent::None);
    assert!(events_rx.try_recv().is_err());
}

#[test]
fn commands_are_queued_in_order() {
    let (mut client, events_rx) = new_client();
    client.start_game();
    client.next_phase();
    client.next_phase();
    client.reset_game();
    assert_eq!(events_rx.try_iter().collect::<Vec<_>>(), [
        ClientEvent::StartGame,
        ClientEvent::NextPhase,
        ClientEvent::NextPhase,
        ClientEvent::ResetGame,
    ]);
}

#[test]
fn server_error_is_logged_without_repaint() {
    let (mut client, _events_rx) = new_client();
    update(&mut client, running_snapshot());
    let frame_before = client.frame().cloned();
    let event = client.process_server_event(ServerEvent::Error { message: "boom".to_owned() });
    assert_eq!(
        event,
        NotableEvent::LogAppended(LogEntry::new("ERROR: boom".to_owned(), LogCategory::Error))
    );
    assert_eq!(client.frame().cloned(), frame_before);
}

#[test]
fn server_error_before_first_snapshot() {
    let (mut client, _events_rx) = new_client();
    let event = client.process_server_event(ServerEvent::Error { message: "Welcome".to_owned() });
    let NotableEvent::LogAppended(entry) = event else {
        panic!("unexpected event: {event:?}");
    };
    assert_eq!(entry.category, LogCategory::Error);
    assert!(client.frame().is_none());
}

#[test]
fn complete_snapshot_updates_frame() {
    let (mut client, _events_rx) = new_client();
    assert!(client.frame().is_none());
    assert_eq!(update(&mut client, running_snapshot()), NotableEvent::FrameUpdated);
    assert_eq!(client.frame().unwrap().player_panels.len(), 2);
    assert_eq!(client.controls(), ControlState { game_running: true, game_over: false });
}

#[test]
fn incomplete_snapshot_keeps_previous_frame() {
    let (mut client, _events_rx) = new_client();
    update(&mut client, running_snapshot());
    let frame_before = client.frame().cloned();

    let reset_notice = GameSnapshot {
        log_messages: vec!["Game has been reset.".to_owned()],
        ..GameSnapshot::default()
    };
    assert_eq!(
        update(&mut client, reset_notice),
        NotableEvent::SnapshotSkipped(SnapshotError::MissingField("players"))
    );
    assert_eq!(client.frame().cloned(), frame_before);
    // Controls follow every snapshot, painted or not.
    assert_eq!(client.controls(), ControlState::initial());

    let mut no_board = running_snapshot();
    no_board.game_board = None;
    assert_eq!(
        update(&mut client, no_board),
        NotableEvent::SnapshotSkipped(SnapshotError::MissingField("game_board"))
    );
    assert_eq!(client.frame().cloned(), frame_before);
    assert_eq!(client.controls(), ControlState { game_running: true, game_over: false });
}

#[test]
fn setup_phase_controls() {
    let (mut client, _events_rx) = new_client();
    let mut snapshot = running_snapshot();
    snapshot.current_phase = Some("SETUP".to_owned());
    snapshot.players = Some(vec![]);
    assert_eq!(update(&mut client, snapshot), NotableEvent::FrameUpdated);
    let controls = client.controls();
    assert!(controls.start_enabled());
    assert!(!controls.next_phase_enabled());
    assert!(client.frame().unwrap().tokens.is_empty());
}

#[test]
fn winner_overlay_lifecycle() {
    let (mut client, _events_rx) = new_client();
    let mut snapshot = running_snapshot();
    snapshot.winner = Some(Winner::Won { name: "Alice".to_owned() });
    update(&mut client, snapshot.clone());
    assert_eq!(
        client.frame().unwrap().winner_overlay.as_deref(),
        Some("游戏结束：Alice 获胜!")
    );
    assert!(!client.controls().next_phase_enabled());

    // Repainting the same state gives the same single overlay.
    update(&mut client, snapshot.clone());
    assert_eq!(
        client.frame().unwrap().winner_overlay.as_deref(),
        Some("游戏结束：Alice 获胜!")
    );

    snapshot.winner = None;
    update(&mut client, snapshot);
    assert_eq!(client.frame().unwrap().winner_overlay, None);
}

#[test]
fn reset_clears_overlay_immediately() {
    let (mut client, events_rx) = new_client();
    let mut snapshot = running_snapshot();
    snapshot.winner = Some(Winner::Draw);
    update(&mut client, snapshot);
    assert_eq!(client.reset_game(), NotableEvent::WinnerOverlayCleared);
    assert_eq!(client.frame().unwrap().winner_overlay, None);
    assert_eq!(events_rx.try_iter().collect::<Vec<_>>(), [ClientEvent::ResetGame]);
    // Nothing left to clear.
    assert_eq!(client.reset_game(), NotableEvent::None);
}

#[test]
fn wire_events() {
    let (mut client, events_rx) = new_client();
    assert_eq!(client.process_wire_event("connect", None), NotableEvent::None);
    assert_eq!(events_rx.try_recv().ok(), Some(ClientEvent::RequestInitialState));

    let payload = serde_json::to_string(&running_snapshot()).unwrap();
    assert_eq!(
        client.process_wire_event("game_state_update", Some(&payload)),
        NotableEvent::FrameUpdated
    );
    let expected = client.renderer().paint(&running_snapshot()).unwrap();
    assert_eq!(client.frame(), Some(&expected));

    // Garbage is dropped and does not disturb the state.
    let frame_before = client.frame().cloned();
    assert_eq!(client.process_wire_event("game_state_update", Some("{")), NotableEvent::None);
    assert_eq!(client.process_wire_event("game_state_update", None), NotableEvent::None);
    assert_eq!(client.process_wire_event("chat_message", Some("{}")), NotableEvent::None);
    assert_eq!(client.frame().cloned(), frame_before);
}
