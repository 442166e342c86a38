#![allow(dead_code)]

use glam::Vec2;
use sono_trainer::{
    embedded_catalog, AppController, AppIntent, AppState, ScreenRect, SimulatorOptions,
    StageLayout, SurfaceFrame, ZoneId, ZoneRegion,
};
use std::sync::Arc;

/// Bühne 1000×600 ab (0,0), Körperschema 600×600 links.
pub fn stage_layout(state: &AppState) -> StageLayout {
    let container = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(1000.0, 600.0));
    let diagram = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(600.0, 600.0));
    StageLayout {
        container,
        zones: ZoneRegion::layout_all(diagram, state.catalog.zones()),
        surface: Some(SurfaceFrame {
            screen_rect: container,
            logical_size: Vec2::new(1000.0, 1000.0),
        }),
        source_anchor: Vec2::new(950.0, 550.0),
    }
}

/// AppState mit eingebettetem Katalog und gemeldetem Layout.
pub fn setup() -> (AppController, AppState) {
    let catalog = embedded_catalog().expect("eingebetteter Katalog muss gültig sein");
    let mut state = AppState::new(Arc::new(catalog), SimulatorOptions::default());
    let mut controller = AppController::new();
    let layout = stage_layout(&state);
    controller
        .handle_intent(&mut state, AppIntent::LayoutChanged { layout })
        .expect("LayoutChanged sollte ohne Fehler durchlaufen");
    (controller, state)
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Zieht den Schallkopf so, dass sein Mittelpunkt auf `center` liegt.
pub fn drag_probe_to(controller: &mut AppController, state: &mut AppState, center: Vec2) {
    let half = state.options.instrument_size_vec() * 0.5;
    let top_left = center - state.layout.container.min - half;
    send(controller, state, AppIntent::InstrumentDragStarted);
    send(controller, state, AppIntent::InstrumentDragged { top_left });
    send(controller, state, AppIntent::InstrumentDropped);
}

pub fn zone_center(state: &AppState, zone: ZoneId) -> Vec2 {
    state
        .layout
        .zones
        .iter()
        .find(|region| region.id == zone)
        .map(|region| region.rect.center())
        .expect("Zone im Layout")
}

pub fn drag_probe_to_zone(controller: &mut AppController, state: &mut AppState, zone: ZoneId) {
    let center = zone_center(state, zone);
    drag_probe_to(controller, state, center);
}

pub fn click_marker(controller: &mut AppController, state: &mut AppState, tag: &str) {
    let zone = state.view.active_zone;
    send(
        controller,
        state,
        AppIntent::MarkerClicked {
            answer_tag: tag.to_string(),
            zone,
        },
    );
}
