use console::Style;
use itertools::Itertools;
use tianji_board::event::ClientEvent;
use tianji_board::game_log::{LogCategory, LogEntry};
use tianji_board::painter::{ACTIVE_OPACITY, Frame, PlayerPanel};

use crate::replay::Replay;


fn log_style(category: LogCategory) -> Style {
    match category {
        LogCategory::Plain => Style::new(),
        LogCategory::Victory => Style::new().green().bold(),
        LogCategory::Elimination => Style::new().red(),
        LogCategory::Error => Style::new().white().on_red(),
    }
}

fn render_log_entry(entry: &LogEntry) -> String {
    format!("  {}\n", log_style(entry.category).apply_to(&entry.text))
}

fn render_player(panel: &PlayerPanel) -> String {
    let marker = if panel.indicator_opacity == ACTIVE_OPACITY { "▶" } else { " " };
    let name = if panel.indicator_opacity == ACTIVE_OPACITY {
        Style::new().reverse().apply_to(&panel.name).to_string()
    } else {
        panel.name.clone()
    };
    let hand = panel.hand.iter().filter_map(|card| card.text.as_deref()).join(", ");
    format!(
        "{marker} {name}  HP {}  gold {}  at {}  [{hand}]\n",
        panel.health, panel.gold, panel.position_text
    )
}

fn render_frame(frame: &Frame) -> String {
    let mut out = String::new();
    let info = &frame.info;
    out.push_str(&format!("{}  {}  {}  {}\n", info.ju, info.turn, info.phase, info.fund));
    out.push_str(&format!(
        "天干: {}  地支: {}\n",
        frame.celestial.stem.name, frame.celestial.branch.name
    ));
    for panel in &frame.player_panels {
        out.push_str(&render_player(panel));
    }
    out.push_str(&format!("Tokens on board: {}\n", frame.tokens.len()));
    let mut gates = frame.gates.iter().flat_map(|g| &g.children).filter_map(|e| e.text.as_deref());
    out.push_str(&format!("Gates: {}\n", gates.join(" ")));
    out.push_str("Log:\n");
    for entry in &frame.log {
        out.push_str(&render_log_entry(entry));
    }
    out
}

pub fn render_replay(replay: &Replay) -> String {
    let mut out = String::new();
    let outgoing = replay.outgoing.iter().map(|event| ClientEvent::name(*event)).join(", ");
    out.push_str(&format!("Sent: {outgoing}\n"));
    if replay.skipped_snapshots > 0 {
        out.push_str(&format!("Skipped incomplete snapshots: {}\n", replay.skipped_snapshots));
    }
    match replay.state.frame() {
        Some(frame) => out.push_str(&render_frame(frame)),
        None => out.push_str("No game state received\n"),
    }
    for entry in &replay.appended_log {
        out.push_str(&render_log_entry(entry));
    }
    let controls = replay.state.controls();
    out.push_str(&format!(
        "Start game: {}  Next phase: {}\n",
        enabled_str(controls.start_enabled()),
        enabled_str(controls.next_phase_enabled())
    ));
    if let Some(message) = replay.state.frame().and_then(|f| f.winner_overlay.as_ref()) {
        out.push_str(&format!("{}\n", Style::new().bold().apply_to(message)));
    }
    out
}

fn enabled_str(enabled: bool) -> &'static str { if enabled { "enabled" } else { "disabled" } }
