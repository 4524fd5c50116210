// Standalone HTML page with the same regions the web client updates in place. Handy for looking at
// a recorded state without running the server.

use std::fs;

use anyhow::Context;
use log::info;
use tianji_board::config::BoardLayout;
use tianji_board::controls::ControlState;
use tianji_board::game_log::LogEntry;
use tianji_board::painter::{BoardRenderer, CardSlot, Frame, PlayerPanel};
use tianji_board::region::*;
use tianji_board::snapshot::{GameSnapshot, SnapshotError};
use tianji_board::view::VElement;


const PAGE_TITLE: &str = "天机";

const STYLE: &str = "\
body { font-family: sans-serif; background: #f4efe4; }
.zone { stroke: #5a4a3a; stroke-width: 1; }
.bu-tian { fill: #e9dcc0; }
.bu-ren { fill: #d8c49a; }
.bu-di { fill: #b89d6e; }
.gong-kan.bu-di { fill: #3b3b4f; }
.labels, .trigram-symbol, .door-text { text-anchor: middle; font-size: 14px; }
.label-on-dark { fill: #f4efe4; }
.door-circle { fill: #fff8e7; stroke: #8a6d3b; }
.player-piece { stroke: #222; stroke-width: 2; fill: #c0392b; }
.current-player { stroke: #f1c40f; stroke-width: 4; }
.card { display: inline-block; border: 1px solid #8a6d3b; padding: 2px 6px; margin: 2px; }
.log-message { margin: 2px 0; }
.victory { color: #1e8449; font-weight: bold; }
.elimination { color: #922b21; }
.error { color: #c0392b; }
.winner-overlay { position: fixed; inset: 40% 20%; background: #000c; color: #fff; \
font-size: 32px; display: flex; align-items: center; justify-content: center; }
";

pub struct RenderConfig {
    pub snapshot_file: String,
    pub layout: BoardLayout,
    pub output_file: Option<String>,
}

pub fn run(config: RenderConfig) -> anyhow::Result<()> {
    let contents = fs::read_to_string(&config.snapshot_file)
        .with_context(|| format!("Reading snapshot {}", config.snapshot_file))?;
    let snapshot: GameSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Parsing snapshot {}", config.snapshot_file))?;
    let renderer = BoardRenderer::new(config.layout);
    let page = render_page(&renderer, &snapshot)
        .with_context(|| format!("Cannot render {}", config.snapshot_file))?;
    match config.output_file {
        Some(output_file) => {
            fs::write(&output_file, page).with_context(|| format!("Writing {output_file}"))?;
            info!("Page written to {output_file}");
        }
        None => print!("{page}"),
    }
    Ok(())
}

pub fn render_page(
    renderer: &BoardRenderer, snapshot: &GameSnapshot,
) -> Result<String, SnapshotError> {
    let frame = renderer.paint(snapshot)?;
    let controls = ControlState::from_snapshot(snapshot);
    let body = VElement::html("body")
        .with_child(board_svg(renderer, &frame))
        .with_child(
            VElement::html("div")
                .with_classes(["player-panels"])
                .with_children(frame.player_panels.iter().map(player_panel)),
        )
        .with_child(info_strip(&frame))
        .with_child(
            VElement::html("div")
                .with_classes(["celestial-cards"])
                .with_child(card_slot(CELESTIAL_STEM_CARD_ID, &frame.celestial.stem))
                .with_child(card_slot(CELESTIAL_BRANCH_CARD_ID, &frame.celestial.branch)),
        )
        .with_child(
            VElement::html("div")
                .with_id(LOG_MESSAGES_ID)
                .with_children(frame.log.iter().map(LogEntry::to_element)),
        )
        .with_child(
            VElement::html("div")
                .with_classes(["controls"])
                .with_child(button(START_GAME_ID, "开始游戏", controls.start_enabled()))
                .with_child(button(NEXT_PHASE_ID, "下一阶段", controls.next_phase_enabled()))
                .with_child(button(RESET_GAME_ID, "重置游戏", true)),
        )
        .with_children(frame.winner_overlay.iter().map(|message| {
            VElement::html("div")
                .with_classes([WINNER_OVERLAY_CLASS])
                .with_text_content(message.clone())
        }));
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{PAGE_TITLE}</title>\n\
        <style>\n{STYLE}</style>\n</head>\n{}\n</html>\n",
        body.to_html()
    ))
}

fn board_svg(renderer: &BoardRenderer, frame: &Frame) -> VElement {
    let size = renderer.geometry().layout().view_box_size();
    let static_board = renderer.static_board();
    let layer = |id: &str, children: &[VElement]| {
        VElement::svg("g").with_id(id).with_children(children.iter().cloned())
    };
    let mut svg = VElement::svg("svg")
        .with_id(BOARD_SVG_ID)
        .with_attribute("xmlns", "http://www.w3.org/2000/svg")
        .with_attribute("viewBox", format!("0 0 {size} {size}"))
        .with_attribute("width", size)
        .with_attribute("height", size);
    for (department, wedges) in &static_board.rings {
        svg = svg.with_child(layer(&ring_layer_id(department), wedges));
    }
    // Same stacking order as `board_layer_ids`.
    svg.with_child(layer(LABEL_LAYER_ID, &static_board.labels))
        .with_child(layer(TRIGRAM_LAYER_ID, &static_board.trigrams))
        .with_child(layer(GATE_LAYER_ID, &frame.gates))
        .with_child(layer(TOKEN_LAYER_ID, &frame.tokens))
}

fn player_panel(panel: &PlayerPanel) -> VElement {
    use PlayerField::*;
    let field = |field: PlayerField, text: &str| {
        VElement::html("span")
            .with_id(&player_field_id(&panel.player_id, field))
            .with_text_content(text.to_owned())
    };
    VElement::html("div")
        .with_classes(["player-panel"])
        .with_child(
            VElement::html("span")
                .with_id(&player_field_id(&panel.player_id, Indicator))
                .with_classes(["turn-indicator"])
                .with_attribute("style", format!("opacity: {}", panel.indicator_opacity))
                .with_text_content("●"),
        )
        .with_child(field(Name, &panel.name))
        .with_child(field(Health, &panel.health))
        .with_child(field(Gold, &panel.gold))
        .with_child(field(Position, &panel.position_text))
        .with_child(
            VElement::html("div")
                .with_id(&player_field_id(&panel.player_id, Hand))
                .with_children(panel.hand.iter().cloned()),
        )
}

fn info_strip(frame: &Frame) -> VElement {
    let info = &frame.info;
    VElement::html("div").with_classes(["game-info"]).with_children(
        [
            (JU_INFO_ID, &info.ju),
            (TURN_INFO_ID, &info.turn),
            (PHASE_INFO_ID, &info.phase),
            (GAME_FUND_INFO_ID, &info.fund),
        ]
        .into_iter()
        .map(|(id, text)| VElement::html("div").with_id(id).with_text_content(text.clone())),
    )
}

fn card_slot(id: &str, slot: &CardSlot) -> VElement {
    VElement::html("div")
        .with_id(id)
        .with_classes(["celestial-card"])
        .with_title(&slot.title)
        .with_child(
            VElement::html("span")
                .with_classes([CARD_NAME_CLASS])
                .with_text_content(slot.name.clone()),
        )
}

fn button(id: &str, label: &str, enabled: bool) -> VElement {
    let button = VElement::html("button").with_id(id).with_text_content(label.to_owned());
    if enabled { button } else { button.with_attribute("disabled", "") }
}
