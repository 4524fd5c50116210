// Turns a snapshot into the full content of every dynamic page region.
//
// `paint` is a pure function of the snapshot and the (fixed) board geometry: painting the same
// snapshot twice gives equal frames. Nothing is carried over between frames, apart from what the
// host keeps on the page between repaints (and the host must replace all of it).

use enum_map::EnumMap;
use strum::IntoEnumIterator;

use crate::config::BoardLayout;
use crate::game_log::LogEntry;
use crate::geometry::{BoardGeometry, Department, Palace, svg_number};
use crate::snapshot::{
    Card, CheckedSnapshot, DunMode, GameSnapshot, Player, PlayerId, SnapshotError, Winner,
};
use crate::view::VElement;


pub const ACTIVE_OPACITY: &str = "1";
pub const INACTIVE_OPACITY: &str = "0.3";
pub const NO_VALUE_PLACEHOLDER: &str = "-";
pub const UNKNOWN_SOLAR_TERM: &str = "未知节气";

const YANG_DUN_LABEL: &str = "阳遁";
const YIN_DUN_LABEL: &str = "阴遁";
const TURN_LABEL: &str = "回合";
const PHASE_LABEL: &str = "阶段";
const FUND_LABEL: &str = "奖金池";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlayerPanel {
    pub player_id: PlayerId,
    pub name: String,
    pub health: String,
    pub gold: String,
    pub indicator_opacity: &'static str,
    pub position_text: String,
    pub hand: Vec<VElement>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InfoStrip {
    pub ju: String,
    pub turn: String,
    pub phase: String,
    pub fund: String,
}

// Content of one celestial card slot. `title` is the hover detail, empty when there's no card.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CardSlot {
    pub name: String,
    pub title: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CelestialPanel {
    pub stem: CardSlot,
    pub branch: CardSlot,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    pub player_panels: Vec<PlayerPanel>,
    pub tokens: Vec<VElement>,
    pub info: InfoStrip,
    pub celestial: CelestialPanel,
    // The log region is rebuilt from these and then scrolled to the last one.
    pub log: Vec<LogEntry>,
    pub gates: Vec<VElement>,
    pub winner_overlay: Option<String>,
}

// The part of the board that never changes: zone wedges, palace labels, trigrams.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StaticBoard {
    pub rings: EnumMap<Department, Vec<VElement>>,
    pub labels: Vec<VElement>,
    pub trigrams: Vec<VElement>,
}

pub struct BoardRenderer {
    geometry: BoardGeometry,
}

impl BoardRenderer {
    // Geometry is computed here, once; every later paint reuses it.
    pub fn new(layout: BoardLayout) -> Self {
        BoardRenderer { geometry: BoardGeometry::new(layout) }
    }

    pub fn geometry(&self) -> &BoardGeometry { &self.geometry }

    pub fn static_board(&self) -> StaticBoard {
        let mut rings = EnumMap::<Department, Vec<VElement>>::default();
        for palace in Palace::iter() {
            for department in Department::iter() {
                rings[department].push(
                    VElement::svg("path")
                        .with_attribute("d", self.geometry.sector_path(palace, department))
                        .with_classes([
                            "zone".to_owned(),
                            format!("gong-{}", palace.id()),
                            format!("bu-{}", department.id()),
                        ]),
                );
            }
        }
        let labels = Palace::iter().map(|palace| self.palace_label(palace)).collect();
        let trigrams = Palace::iter()
            .map(|palace| {
                VElement::svg("text")
                    .with_point("x", "y", self.geometry.trigram_anchor(palace))
                    .with_attribute("dy", "0.35em")
                    .with_classes(["trigram-symbol"])
                    .with_title(&format!("{} {}", palace.name(), palace.luoshu_number()))
                    .with_text_content(palace.trigram().to_string())
            })
            .collect();
        StaticBoard { rings, labels, trigrams }
    }

    pub fn paint(&self, snapshot: &GameSnapshot) -> Result<Frame, SnapshotError> {
        let checked = snapshot.checked()?;
        Ok(Frame {
            player_panels: checked.players.iter().map(|p| player_panel(&checked, p)).collect(),
            tokens: self.tokens(&checked),
            info: info_strip(snapshot),
            celestial: CelestialPanel {
                stem: card_slot(snapshot.current_celestial_stem.as_ref()),
                branch: card_slot(snapshot.current_terrestrial_branch.as_ref()),
            },
            log: snapshot.log_messages.iter().map(LogEntry::classified).collect(),
            gates: self.gates(&checked),
            winner_overlay: snapshot.winner.as_ref().map(winner_message),
        })
    }

    fn palace_label(&self, palace: Palace) -> VElement {
        let anchor = self.geometry.label_anchor(palace);
        let angle = self.geometry.palace_mid_angle(palace);
        let mut classes = vec!["labels"];
        if palace == Palace::Kan {
            classes.push("label-on-dark");
        }
        let label = VElement::svg("text")
            .with_point("x", "y", anchor)
            .with_attribute("dy", "0.35em")
            .with_classes(classes)
            .with_text_content(palace.name());
        // Keep the lower half of the labels readable from the outside.
        if angle > 90.0 && angle < 270.0 {
            label.with_attribute(
                "transform",
                format!("rotate(180 {} {})", svg_number(anchor.x), svg_number(anchor.y)),
            )
        } else {
            label
        }
    }

    fn tokens(&self, checked: &CheckedSnapshot) -> Vec<VElement> {
        let radius = self.geometry.layout().token_radius;
        checked
            .players
            .iter()
            .filter(|player| !player.is_eliminated)
            .filter_map(|player| {
                let center = self.geometry.resolve_position(player.position()?)?;
                let mut classes =
                    vec!["player-piece".to_owned(), format!("player-{}-piece", player.player_id)];
                if checked.snapshot.is_active(player) {
                    classes.push("current-player".to_owned());
                }
                Some(
                    VElement::svg("circle")
                        .with_point("cx", "cy", center)
                        .with_attribute("r", svg_number(radius))
                        .with_classes(classes),
                )
            })
            .collect()
    }

    // One marker per palace in the gate table, in board order. Keys that are not palaces are
    // ignored.
    fn gates(&self, checked: &CheckedSnapshot) -> Vec<VElement> {
        let Some(qimen_gates) = &checked.board.qimen_gates else {
            return vec![];
        };
        let marker_radius = self.geometry.layout().gate_marker_radius;
        Palace::iter()
            .filter_map(|palace| {
                let symbol = qimen_gates.gates.get(palace.id())?;
                let anchor = self.geometry.gate_anchor(palace);
                Some(
                    VElement::svg("g")
                        .with_classes(["qimen-door"])
                        .with_child(
                            VElement::svg("circle")
                                .with_point("cx", "cy", anchor)
                                .with_attribute("r", svg_number(marker_radius))
                                .with_classes(["door-circle"]),
                        )
                        .with_child(
                            VElement::svg("text")
                                .with_point("x", "y", anchor)
                                .with_classes(["door-text"])
                                .with_text_content(symbol.clone()),
                        ),
                )
            })
            .collect()
    }
}

fn player_panel(checked: &CheckedSnapshot, player: &Player) -> PlayerPanel {
    let indicator_opacity =
        if checked.snapshot.is_active(player) { ACTIVE_OPACITY } else { INACTIVE_OPACITY };
    // Resolved through the server's zone table rather than the geometry: this is about what the
    // zone is called, not about where it is drawn.
    let position_text = player
        .position
        .as_deref()
        .and_then(|position| checked.board.zones.get(position))
        .map(|zone| format!("{}-{}", zone.palace.to_uppercase(), zone.department.to_uppercase()))
        .unwrap_or_else(|| NO_VALUE_PLACEHOLDER.to_owned());
    let hand = player
        .hand
        .iter()
        .map(|card| {
            VElement::html("div")
                .with_classes(["card"])
                .with_title(&card.description)
                .with_text_content(card.name.clone())
        })
        .collect();
    PlayerPanel {
        player_id: player.player_id.clone(),
        name: player.name.clone(),
        health: player.health.to_string(),
        gold: player.gold.to_string(),
        indicator_opacity,
        position_text,
        hand,
    }
}

fn info_strip(snapshot: &GameSnapshot) -> InfoStrip {
    let solar_term = snapshot
        .solar_term
        .as_deref()
        .filter(|term| !term.is_empty())
        .unwrap_or(UNKNOWN_SOLAR_TERM);
    let dun = match snapshot.dun_mode() {
        DunMode::Yang => YANG_DUN_LABEL,
        DunMode::Yin => YIN_DUN_LABEL,
    };
    let turn = snapshot.current_turn.map(|t| t.to_string()).unwrap_or_default();
    let phase = snapshot.current_phase.as_deref().unwrap_or_default();
    let fund = snapshot.game_fund.map(|f| f.to_string()).unwrap_or_default();
    InfoStrip {
        ju: format!("{solar_term} | {dun}"),
        turn: format!("{TURN_LABEL}: {turn}"),
        phase: format!("{PHASE_LABEL}: {phase}"),
        fund: format!("{FUND_LABEL}: {fund}"),
    }
}

fn card_slot(card: Option<&Card>) -> CardSlot {
    match card {
        Some(card) => CardSlot {
            name: card.name.clone(),
            title: card.description.clone(),
        },
        None => CardSlot {
            name: NO_VALUE_PLACEHOLDER.to_owned(),
            title: String::new(),
        },
    }
}

pub fn winner_message(winner: &Winner) -> String {
    match winner {
        Winner::Draw => "游戏结束：平局！".to_owned(),
        Winner::Won { name } => format!("游戏结束：{name} 获胜!"),
    }
}
