// Ids and classes of the page regions the renderer owns. Shared by the web client and by the
// static HTML export so that both produce the same document structure.

use strum::IntoStaticStr;

use crate::geometry::Department;
use crate::snapshot::PlayerId;


pub const BOARD_SVG_ID: &str = "board";
pub const LABEL_LAYER_ID: &str = "text-labels";
pub const TRIGRAM_LAYER_ID: &str = "trigram-symbols-layer";
pub const GATE_LAYER_ID: &str = "qimen-doors";
pub const TOKEN_LAYER_ID: &str = "player-pieces";

pub const JU_INFO_ID: &str = "ju-info";
pub const TURN_INFO_ID: &str = "turn-info";
pub const PHASE_INFO_ID: &str = "phase-info";
pub const GAME_FUND_INFO_ID: &str = "game-fund-info";

pub const CELESTIAL_STEM_CARD_ID: &str = "celestial-stem-card";
pub const CELESTIAL_BRANCH_CARD_ID: &str = "celestial-branch-card";
pub const CARD_NAME_CLASS: &str = "card-name";

pub const LOG_MESSAGES_ID: &str = "log-messages";

pub const START_GAME_ID: &str = "start-game";
pub const NEXT_PHASE_ID: &str = "next-phase";
pub const RESET_GAME_ID: &str = "reset-game";

pub const WINNER_OVERLAY_CLASS: &str = "winner-overlay";

#[derive(Clone, Copy, PartialEq, Eq, Debug, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerField {
    Name,
    Health,
    Gold,
    Position,
    Indicator,
    Hand,
}

pub fn player_field_id(player_id: &PlayerId, field: PlayerField) -> String {
    let field: &'static str = field.into();
    format!("player{player_id}-{field}")
}

pub fn ring_layer_id(department: Department) -> String { format!("{}-ring", department.id()) }

// Layers of the board SVG from bottom to top.
pub fn board_layer_ids() -> Vec<String> {
    use Department::*;
    vec![
        ring_layer_id(Di),
        ring_layer_id(Ren),
        ring_layer_id(Tian),
        LABEL_LAYER_ID.to_owned(),
        TRIGRAM_LAYER_ID.to_owned(),
        GATE_LAYER_ID.to_owned(),
        TOKEN_LAYER_ID.to_owned(),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_region_ids() {
        assert_eq!(player_field_id(&PlayerId::from(1), PlayerField::Name), "player1-name");
        assert_eq!(
            player_field_id(&PlayerId::from("2"), PlayerField::Indicator),
            "player2-indicator"
        );
        assert_eq!(ring_layer_id(Department::Di), "di-ring");
    }
}
