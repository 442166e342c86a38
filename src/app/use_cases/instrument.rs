//! Use-Case-Funktionen für Schallkopf und Bühnen-Layout.

use crate::app::{AppState, StageLayout};
use crate::core::clamp_to_container;

/// Übernimmt das zuletzt gemeldete Bühnen-Layout.
///
/// Der Schallkopf wird in den neuen Container zurückgeklemmt, damit er nach
/// einem Verkleinern sichtbar und greifbar bleibt.
pub fn set_layout(state: &mut AppState, layout: StageLayout) {
    log::debug!(
        "Bühnen-Layout aktualisiert: {} Zonen, Zeichenfläche {}",
        layout.zones.len(),
        if layout.surface.is_some() {
            "vorhanden"
        } else {
            "fehlt"
        }
    );
    state.layout = layout;

    let clamped = clamp_to_container(
        state.instrument.top_left,
        state.options.instrument_size_vec(),
        state.layout.container.size(),
    );
    if clamped != state.instrument.top_left {
        log::debug!(
            "Schallkopf nach Layout-Wechsel verschoben: {} -> {}",
            state.instrument.top_left,
            clamped
        );
        state.instrument.top_left = clamped;
    }
}

/// Setzt die (bereits geklemmte) Position des Schallkopfs.
pub fn move_to(state: &mut AppState, top_left: glam::Vec2) {
    state.instrument.top_left = top_left;
}

/// Markiert den Beginn eines Drag-Vorgangs.
pub fn begin_drag(state: &mut AppState) {
    state.instrument.dragging = true;
}

/// Markiert das Ende eines Drag-Vorgangs.
pub fn end_drag(state: &mut AppState) {
    state.instrument.dragging = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::sample_state;
    use crate::core::ScreenRect;
    use glam::Vec2;

    #[test]
    fn move_updates_center() {
        let mut state = sample_state();
        let container_min = state.layout.container.min;

        move_to(&mut state, Vec2::new(100.0, 40.0));

        // Schallkopf 64×64 → Mittelpunkt um 32 versetzt
        assert_eq!(
            state.instrument_center(),
            container_min + Vec2::new(132.0, 72.0)
        );
    }

    #[test]
    fn shrinking_layout_pulls_instrument_back_inside() {
        let mut state = sample_state();
        move_to(&mut state, Vec2::new(700.0, 300.0));

        let mut layout = state.layout.clone();
        layout.container = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(500.0, 300.0));
        set_layout(&mut state, layout);

        // 64×64 → höchstens (436, 236)
        assert_eq!(state.instrument.top_left, Vec2::new(436.0, 236.0));
    }

    #[test]
    fn growing_layout_keeps_instrument_position() {
        let mut state = sample_state();
        move_to(&mut state, Vec2::new(120.0, 80.0));

        let mut layout = state.layout.clone();
        layout.container = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(1600.0, 900.0));
        set_layout(&mut state, layout);

        assert_eq!(state.instrument.top_left, Vec2::new(120.0, 80.0));
    }

    #[test]
    fn drag_lifecycle_toggles_flag() {
        let mut state = sample_state();
        begin_drag(&mut state);
        assert!(state.instrument.dragging);
        end_drag(&mut state);
        assert!(!state.instrument.dragging);
    }
}
