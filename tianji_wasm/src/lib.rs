mod vdom;
mod web_document;
mod web_element_ext;
mod web_error_handling;
mod web_iterators;
mod web_logger;
mod web_util;

use std::sync::mpsc;

use log::{LevelFilter, warn};
use wasm_bindgen::prelude::*;

use tianji_board::client::{ClientState, NotableEvent};
use tianji_board::config::BoardLayout;
use tianji_board::controls::ControlState;
use tianji_board::event::ClientEvent;
use tianji_board::game_log::LogEntry;
use tianji_board::painter::{CardSlot, Frame, PlayerPanel, StaticBoard};
use tianji_board::region::*;
use tianji_board::view::VElement;

use web_document::{WebDocument, web_document};
use web_element_ext::WebElementExt;
use web_error_handling::JsResult;
use web_util::scroll_to_bottom;


#[wasm_bindgen]
pub struct WebClient {
    state: ClientState,
    server_rx: mpsc::Receiver<ClientEvent>,
}

#[wasm_bindgen]
impl WebClient {
    // `layout_json` may override any subset of `BoardLayout` fields.
    pub fn new_client(layout_json: Option<String>) -> JsResult<WebClient> {
        web_logger::init_logger(LevelFilter::Info);
        let layout = match layout_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|err| rust_error!("Invalid board layout: {}", err))?,
            None => BoardLayout::default(),
        };
        let (server_tx, server_rx) = mpsc::channel();
        Ok(WebClient {
            state: ClientState::new(layout, server_tx),
            server_rx,
        })
    }

    // Draws the parts of the board that never change. Call once, after the page has loaded.
    pub fn init_page(&self) -> JsResult<()> {
        let document = web_document()?;
        let svg = document.get_existing_element_by_id(BOARD_SVG_ID)?;
        let size = self.state.renderer().geometry().layout().view_box_size();
        svg.set_attribute("viewBox", &format!("0 0 {size} {size}"))?;
        for layer_id in board_layer_ids() {
            document.ensure_svg_node("g", &layer_id, &svg)?;
        }
        render_static_board(&document, &self.state.renderer().static_board())?;
        update_controls(&document, self.state.controls())
    }

    pub fn process_server_event(
        &mut self, name: &str, payload_json: Option<String>,
    ) -> JsResult<()> {
        let event = self.state.process_wire_event(name, payload_json.as_deref());
        self.apply_notable_event(event)
    }

    pub fn start_game(&mut self) { self.state.start_game(); }
    pub fn next_phase(&mut self) { self.state.next_phase(); }

    pub fn reset_game(&mut self) -> JsResult<()> {
        let event = self.state.reset_game();
        self.apply_notable_event(event)
    }

    // Wire name of the next command to send, if any.
    pub fn next_outgoing_event(&mut self) -> Option<String> {
        self.server_rx.try_recv().ok().map(|event| event.name().to_owned())
    }

    fn apply_notable_event(&self, event: NotableEvent) -> JsResult<()> {
        let document = web_document()?;
        match event {
            NotableEvent::None => Ok(()),
            NotableEvent::FrameUpdated => {
                if let Some(frame) = self.state.frame() {
                    apply_frame(&document, frame)?;
                }
                update_controls(&document, self.state.controls())
            }
            NotableEvent::SnapshotSkipped(_) => update_controls(&document, self.state.controls()),
            NotableEvent::LogAppended(entry) => append_log_entry(&document, &entry),
            NotableEvent::WinnerOverlayCleared => remove_winner_overlays(&document),
        }
    }
}

fn board_layer(document: &WebDocument, layer_id: &str) -> JsResult<web_sys::Element> {
    let svg = document.get_existing_element_by_id(BOARD_SVG_ID)?;
    document.ensure_svg_node("g", layer_id, &svg)
}

fn render_static_board(document: &WebDocument, board: &StaticBoard) -> JsResult<()> {
    for (department, wedges) in &board.rings {
        let layer = board_layer(document, &ring_layer_id(department))?;
        vdom::replace_children(document, &layer, wedges)?;
    }
    let labels = board_layer(document, LABEL_LAYER_ID)?;
    vdom::replace_children(document, &labels, &board.labels)?;
    let trigrams = board_layer(document, TRIGRAM_LAYER_ID)?;
    vdom::replace_children(document, &trigrams, &board.trigrams)
}

// Every region is rebuilt from scratch, so nothing from the previous frame survives.
fn apply_frame(document: &WebDocument, frame: &Frame) -> JsResult<()> {
    for panel in &frame.player_panels {
        update_player_panel(document, panel)?;
    }

    let tokens = board_layer(document, TOKEN_LAYER_ID)?;
    vdom::replace_children(document, &tokens, &frame.tokens)?;
    let gates = board_layer(document, GATE_LAYER_ID)?;
    vdom::replace_children(document, &gates, &frame.gates)?;

    let info = &frame.info;
    for (id, text) in [
        (JU_INFO_ID, &info.ju),
        (TURN_INFO_ID, &info.turn),
        (PHASE_INFO_ID, &info.phase),
        (GAME_FUND_INFO_ID, &info.fund),
    ] {
        document.get_existing_element_by_id(id)?.set_text_content(Some(text));
    }
    update_card_slot(document, CELESTIAL_STEM_CARD_ID, &frame.celestial.stem)?;
    update_card_slot(document, CELESTIAL_BRANCH_CARD_ID, &frame.celestial.branch)?;

    let log_node = document.get_existing_element_by_id(LOG_MESSAGES_ID)?;
    let entries: Vec<VElement> = frame.log.iter().map(LogEntry::to_element).collect();
    vdom::replace_children(document, &log_node, &entries)?;
    scroll_to_bottom(&log_node);

    remove_winner_overlays(document)?;
    if let Some(message) = &frame.winner_overlay {
        let overlay = document.create_element("div")?.with_classes([WINNER_OVERLAY_CLASS])?;
        overlay.set_text_content(Some(message));
        document.body()?.append_child(&overlay)?;
    }
    Ok(())
}

fn update_player_panel(document: &WebDocument, panel: &PlayerPanel) -> JsResult<()> {
    use PlayerField::*;
    let field = |f| document.get_element_by_id(&player_field_id(&panel.player_id, f));
    let (Some(name), Some(health), Some(gold), Some(position), Some(indicator), Some(hand)) =
        (field(Name), field(Health), field(Gold), field(Position), field(Indicator), field(Hand))
    else {
        warn!("Cannot find panel for player {}", panel.player_id);
        return Ok(());
    };
    name.set_text_content(Some(&panel.name));
    health.set_text_content(Some(&panel.health));
    gold.set_text_content(Some(&panel.gold));
    position.set_text_content(Some(&panel.position_text));
    indicator.set_style_property("opacity", panel.indicator_opacity)?;
    vdom::replace_children(document, &hand, &panel.hand)
}

fn update_card_slot(document: &WebDocument, card_id: &str, slot: &CardSlot) -> JsResult<()> {
    let card = document.get_existing_element_by_id(card_id)?;
    card.set_attribute("title", &slot.title)?;
    let name = card
        .query_selector(&format!(".{CARD_NAME_CLASS}"))?
        .ok_or_else(|| rust_error!("Card \"{}\" has no name node", card_id))?;
    name.set_text_content(Some(&slot.name));
    Ok(())
}

fn append_log_entry(document: &WebDocument, entry: &LogEntry) -> JsResult<()> {
    let log_node = document.get_existing_element_by_id(LOG_MESSAGES_ID)?;
    log_node.append_child(&vdom::build_element(document, &entry.to_element())?.into())?;
    scroll_to_bottom(&log_node);
    Ok(())
}

fn remove_winner_overlays(document: &WebDocument) -> JsResult<()> {
    for node in document.query_selector_all(&format!(".{WINNER_OVERLAY_CLASS}"))? {
        if let Some(parent) = node.parent_node() {
            parent.remove_child(&node)?;
        }
    }
    Ok(())
}

fn update_controls(document: &WebDocument, controls: ControlState) -> JsResult<()> {
    document.get_existing_element_by_id(START_GAME_ID)?.set_enabled(controls.start_enabled())?;
    document
        .get_existing_element_by_id(NEXT_PHASE_ID)?
        .set_enabled(controls.next_phase_enabled())?;
    Ok(())
}
