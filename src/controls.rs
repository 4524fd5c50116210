use crate::snapshot::{GameSnapshot, SETUP_PHASE};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ControlState {
    pub game_running: bool,
    pub game_over: bool,
}

impl ControlState {
    // Before the first snapshot arrives nothing is running.
    pub fn initial() -> Self { ControlState { game_running: false, game_over: false } }

    // Works on incomplete snapshots too: a missing player list means "not running, not over".
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let players = snapshot.players.as_deref();
        let game_running = snapshot.current_phase.as_deref() != Some(SETUP_PHASE)
            && players.is_some_and(|p| !p.is_empty());
        let game_over = snapshot.winner.is_some()
            || players.is_some_and(|p| p.iter().filter(|p| !p.is_eliminated).count() <= 1);
        ControlState { game_running, game_over }
    }

    pub fn start_enabled(&self) -> bool { !self.game_running }
    pub fn next_phase_enabled(&self) -> bool { self.game_running && !self.game_over }
}
