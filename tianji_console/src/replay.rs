// Runs a recorded session through the same client state the browser uses.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::mpsc;

use anyhow::Context;
use tianji_board::client::{ClientState, NotableEvent};
use tianji_board::config::BoardLayout;
use tianji_board::event::{ClientEvent, ServerEvent};
use tianji_board::game_log::LogEntry;

use crate::tui;


pub struct ReplayConfig {
    pub session_file: String,
    pub layout: BoardLayout,
}

pub struct Replay {
    pub state: ClientState,
    pub outgoing: Vec<ClientEvent>,
    // Entries that were appended outside of a repaint (server errors). Cleared by the next frame,
    // like on the page.
    pub appended_log: Vec<LogEntry>,
    pub skipped_snapshots: usize,
}

pub fn run(config: ReplayConfig) -> anyhow::Result<()> {
    let file = File::open(&config.session_file)
        .with_context(|| format!("Opening session {}", config.session_file))?;
    let replay = replay_session(BufReader::new(file), config.layout)?;
    print!("{}", tui::render_replay(&replay));
    Ok(())
}

// Lines are adjacently tagged server events; blank lines are ignored.
pub fn replay_session(input: impl BufRead, layout: BoardLayout) -> anyhow::Result<Replay> {
    let (events_tx, events_rx) = mpsc::channel();
    let mut replay = Replay {
        state: ClientState::new(layout, events_tx),
        outgoing: vec![],
        appended_log: vec![],
        skipped_snapshots: 0,
    };
    for (index, line) in input.lines().enumerate() {
        let line = line.context("Reading session")?;
        if line.trim().is_empty() {
            continue;
        }
        let event: ServerEvent = serde_json::from_str(&line)
            .with_context(|| format!("Parsing server event on line {}", index + 1))?;
        match replay.state.process_server_event(event) {
            NotableEvent::None | NotableEvent::WinnerOverlayCleared => {}
            NotableEvent::FrameUpdated => replay.appended_log.clear(),
            NotableEvent::SnapshotSkipped(_) => replay.skipped_snapshots += 1,
            NotableEvent::LogAppended(entry) => replay.appended_log.push(entry),
        }
        replay.outgoing.extend(events_rx.try_iter());
    }
    Ok(replay)
}
