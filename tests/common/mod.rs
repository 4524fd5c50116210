// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::{BTreeMap, HashMap};

use strum::IntoEnumIterator;
use tianji_board::geometry::{Palace, ZoneId};
use tianji_board::snapshot::{Board, Card, GameSnapshot, Player, PlayerId, QimenGates, Zone};


#[allow(dead_code)]
pub fn card(name: &str, description: &str) -> Card {
    Card { name: name.to_owned(), description: description.to_owned() }
}

#[allow(dead_code)]
pub fn player(id: u32, name: &str, position: Option<&str>) -> Player {
    Player {
        player_id: PlayerId::from(id),
        name: name.to_owned(),
        health: 10,
        gold: 5,
        position: position.map(str::to_owned),
        hand: vec![],
        is_eliminated: false,
    }
}

// The zone table as the server builds it: every sector plus the center.
#[allow(dead_code)]
pub fn all_zones() -> HashMap<String, Zone> {
    ZoneId::all()
        .map(|zone_id| {
            let zone = match zone_id {
                ZoneId::Sector { palace, department } => Zone {
                    palace: palace.id().to_owned(),
                    department: department.id().to_owned(),
                },
                ZoneId::Center => Zone {
                    palace: "zhong".to_owned(),
                    department: "zhong".to_owned(),
                },
            };
            (zone_id.to_string(), zone)
        })
        .collect()
}

#[allow(dead_code)]
pub fn gates(entries: &[(&str, &str)]) -> QimenGates {
    QimenGates {
        ju_number: None,
        gates: entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
}

#[allow(dead_code)]
pub fn all_gates() -> QimenGates {
    const SYMBOLS: [&str; 8] = ["景门", "死门", "惊门", "开门", "休门", "生门", "伤门", "杜门"];
    let gates: BTreeMap<String, String> = Palace::iter()
        .zip(SYMBOLS)
        .map(|(palace, symbol)| (palace.id().to_owned(), symbol.to_owned()))
        .collect();
    QimenGates { ju_number: Some(serde_json::json!(4)), gates }
}

// Two players in a running game, Alice to move.
#[allow(dead_code)]
pub fn running_snapshot() -> GameSnapshot {
    GameSnapshot {
        players: Some(vec![
            player(1, "Alice", Some("li_tian")),
            player(2, "Bob", Some("kan_di")),
        ]),
        game_board: Some(Board { zones: all_zones(), qimen_gates: Some(all_gates()) }),
        active_player_id: Some(PlayerId::from(1)),
        current_turn: Some(3),
        current_phase: Some("TIME".to_owned()),
        dun_type: Some("YANG".to_owned()),
        solar_term: Some("冬至".to_owned()),
        game_fund: Some(100),
        current_celestial_stem: Some(card("甲", "Wood, yang")),
        current_terrestrial_branch: None,
        log_messages: vec!["Turn 3 started.".to_owned()],
        winner: None,
    }
}
