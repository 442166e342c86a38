//! Gemeinsame Testdaten für die Use-Case-Tests.

use super::{AppState, StageLayout};
use crate::core::{
    ContentCatalog, ImageMarker, OrientationKey, Question, ScreenRect, SurfaceFrame, TailSide,
    Variant, ViewContent, ZoneDefinition, ZoneId, ZoneRegion,
};
use crate::shared::SimulatorOptions;
use glam::Vec2;
use std::sync::Arc;

fn variant(angle: u16, tail: TailSide, view: &str) -> Variant {
    Variant {
        angle,
        tail,
        view_name: view.to_string(),
    }
}

fn zone(id: u32, name: &str, bounds: [f32; 4], variants: Vec<Variant>) -> ZoneDefinition {
    ZoneDefinition {
        id: ZoneId(id),
        name: name.to_string(),
        bounds,
        variants,
    }
}

fn view(
    angle: u16,
    tail: TailSide,
    zone: u32,
    markers: &[(&str, &str)],
) -> (OrientationKey, ZoneId, ViewContent) {
    let key = OrientationKey::new(angle, tail);
    let markers = markers
        .iter()
        .enumerate()
        .map(|(i, (tag, label))| ImageMarker::new(20.0 + 10.0 * i as f32, 50.0, *label, *tag))
        .collect();
    (
        key,
        ZoneId(zone),
        ViewContent {
            image_path: format!("images/{key}_{zone}.png"),
            markers,
        },
    )
}

fn question(text: &str, key: OrientationKey, zone: u32, answer: &str) -> Question {
    Question {
        text: text.to_string(),
        key,
        correct_position: ZoneId(zone),
        correct_answer: answer.to_string(),
        answer_image: format!("answers/{answer}.png"),
    }
}

/// Kleiner Katalog mit drei Zonen (3, 2 und 1 Variante) und drei Fragen.
pub(crate) fn sample_catalog() -> ContentCatalog {
    use TailSide::{Down, Up};

    let zones = vec![
        zone(
            1,
            "Parasternal",
            [0.0, 0.0, 0.25, 0.5],
            vec![
                variant(300, Up, "Long axis"),
                variant(30, Up, "Short axis"),
                variant(0, Up, "Vertical"),
            ],
        ),
        zone(
            2,
            "Apical",
            [0.5, 0.0, 0.75, 0.5],
            vec![variant(300, Up, "Four chamber"), variant(120, Down, "Two chamber")],
        ),
        zone(3, "Subcostal", [0.0, 0.6, 0.25, 1.0], vec![variant(270, Up, "Subcostal")]),
    ];

    let views = vec![
        view(
            300,
            Up,
            2,
            &[("F", "Right ventricle"), ("G", "Left ventricle"), ("H", "Left atrium")],
        ),
        view(300, Up, 1, &[("A", "Aorta"), ("C", "Mitral valve")]),
        view(30, Up, 1, &[("K", "Papillary muscle")]),
        view(120, Down, 2, &[("M", "Left atrium")]),
        view(270, Up, 3, &[("S", "Liver")]),
    ];

    let questions = vec![
        question("Where is the left ventricle?", OrientationKey::new(300, Up), 2, "G"),
        question("Where is the mitral valve?", OrientationKey::new(300, Up), 1, "C"),
        question("Where is the liver?", OrientationKey::new(270, Up), 3, "S"),
    ];

    match ContentCatalog::new(zones, views, questions) {
        Ok(catalog) => catalog,
        Err(e) => panic!("Testkatalog ungültig: {e:#}"),
    }
}

/// Layout: Container 800×400 bei (0,0), Zeichenfläche deckt den Container ab.
pub(crate) fn sample_layout(catalog: &ContentCatalog) -> StageLayout {
    let container = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(800.0, 400.0));
    StageLayout {
        container,
        zones: ZoneRegion::layout_all(container, catalog.zones()),
        surface: Some(SurfaceFrame {
            screen_rect: container,
            logical_size: Vec2::new(1000.0, 1000.0),
        }),
        source_anchor: Vec2::new(780.0, 380.0),
    }
}

/// AppState im Menü mit Testkatalog und Testlayout.
pub(crate) fn sample_state() -> AppState {
    let catalog = sample_catalog();
    let layout = sample_layout(&catalog);
    let mut state = AppState::new(Arc::new(catalog), SimulatorOptions::default());
    state.layout = layout;
    state
}

/// Mittelpunkt einer Zone im aktuellen Layout.
pub(crate) fn zone_center(state: &AppState, zone: ZoneId) -> Vec2 {
    state
        .layout
        .zones
        .iter()
        .find(|region| region.id == zone)
        .map(|region| region.rect.center())
        .unwrap_or_else(|| panic!("Zone {zone} nicht im Layout"))
}

/// Setzt den Schallkopf so, dass sein Mittelpunkt auf `point` liegt (ohne Klemmung).
pub(crate) fn move_center_to(state: &mut AppState, point: Vec2) {
    let half = state.options.instrument_size_vec() * 0.5;
    state.instrument.top_left = point - state.layout.container.min - half;
}

/// Setzt den Schallkopf mittig auf eine Zone des aktuellen Layouts.
pub(crate) fn move_center_to_zone(state: &mut AppState, zone: ZoneId) {
    let center = zone_center(state, zone);
    move_center_to(state, center);
}
