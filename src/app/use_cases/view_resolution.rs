//! Use-Case-Funktionen für die Auflösung Position → Zone → Variante → Inhalt.

use super::connector;
use crate::app::{AppState, ViewState};
use crate::core::resolve_zone;

/// Löst Zone und Variante aus der aktuellen Schallkopf-Position neu auf.
///
/// Ohne Zone: Ruhe-Orientierung. Neue Zone: immer erste Variante.
/// Gleiche Zone: Varianten-Index bleibt erhalten.
pub fn resolve(state: &mut AppState) {
    let center = state.instrument_center();
    let zone = resolve_zone(center, &state.layout.zones);

    match zone {
        None => {
            if state.view.active_zone.is_some() {
                log::debug!("Schallkopf hat Zone {:?} verlassen", state.view.active_zone);
                clear_highlight(state);
            }
            state.view = ViewState::idle(state.options.idle_orientation());
        }
        Some(zone) if state.view.active_zone != Some(zone) => {
            log::debug!("Zone {} betreten", zone);
            state.view.active_zone = Some(zone);
            state.view.variant_index = 0;
            apply_variant(state);
            clear_highlight(state);
        }
        Some(_) => apply_variant(state),
    }

    connector::request(state);
}

/// Wechselt zur nächsten Variante der aktiven Zone (zyklisch).
///
/// No-op ohne Zone oder bei nur einer Variante.
pub fn cycle_variant(state: &mut AppState) {
    let Some(zone) = state.view.active_zone else {
        log::debug!("Variantenwechsel ohne aktive Zone ignoriert");
        return;
    };
    let count = state.catalog.variant_count(zone);
    if count <= 1 {
        log::debug!("Zone {} hat nur eine Variante, kein Wechsel", zone);
        return;
    }

    state.view.variant_index = (state.view.variant_index + 1) % count;
    apply_variant(state);
    clear_highlight(state);
    connector::request(state);
}

/// Setzt die Ansicht auf die Ruhe-Orientierung zurück.
pub fn reset(state: &mut AppState) {
    state.view = ViewState::idle(state.options.idle_orientation());
    connector::request(state);
}

/// Gibt zurück, ob die Varianten-Umschaltung angeboten wird.
///
/// Nur in einer laufenden Sitzung und bei mehr als einer Variante.
pub fn cycle_available(state: &AppState) -> bool {
    state.mode.is_some() && state.active_variant_count() > 1
}

/// Gibt zurück, ob die aktive Variante die neutrale (senkrechte) Haltung ist.
pub fn is_neutral(state: &AppState) -> bool {
    let count = state.active_variant_count();
    match state.options.neutral_variant_index {
        Some(neutral) if count > 0 => state.view.variant_index % count == neutral,
        _ => false,
    }
}

/// Übernimmt die Orientierung der aktiven Variante.
fn apply_variant(state: &mut AppState) {
    let index = state.view.variant_index;
    let key = state
        .view
        .active_zone
        .and_then(|zone| state.catalog.variant(zone, index))
        .map(|variant| variant.key());

    state.view.orientation = match key {
        Some(key) => key,
        None => {
            log::warn!(
                "Keine Variante für Zone {:?}, verwende Ruhe-Orientierung",
                state.view.active_zone
            );
            state.options.idle_orientation()
        }
    };
}

fn clear_highlight(state: &mut AppState) {
    state.sandbox.highlighted_tag = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{move_center_to, move_center_to_zone, sample_state, zone_center};
    use crate::app::ViewPhase;
    use crate::core::{OrientationKey, SessionMode, TailSide, ZoneId};
    use glam::Vec2;

    #[test]
    fn entering_zone_starts_at_first_variant() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(2));
        resolve(&mut state);

        assert_eq!(
            state.view.phase(),
            ViewPhase::ZoneEntered {
                zone: ZoneId(2),
                variant_index: 0
            }
        );
        assert_eq!(state.view.orientation, OrientationKey::new(300, TailSide::Up));
    }

    #[test]
    fn same_zone_keeps_variant_index() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(2));
        resolve(&mut state);
        cycle_variant(&mut state);
        assert_eq!(state.view.variant_index, 1);

        // Kleine Bewegung innerhalb der Zone
        let nudged = zone_center(&state, ZoneId(2)) + Vec2::new(5.0, 5.0);
        move_center_to(&mut state, nudged);
        resolve(&mut state);
        assert_eq!(state.view.variant_index, 1);
        assert_eq!(state.view.orientation, OrientationKey::new(120, TailSide::Down));
    }

    #[test]
    fn switching_zone_forgets_variant_index() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(2));
        resolve(&mut state);
        cycle_variant(&mut state);

        move_center_to_zone(&mut state, ZoneId(1));
        resolve(&mut state);
        assert_eq!(state.view.variant_index, 0);

        move_center_to_zone(&mut state, ZoneId(2));
        resolve(&mut state);
        assert_eq!(state.view.variant_index, 0);
    }

    #[test]
    fn leaving_zones_resets_to_idle_orientation() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(2));
        resolve(&mut state);
        cycle_variant(&mut state);

        move_center_to(&mut state, Vec2::new(700.0, 350.0));
        resolve(&mut state);

        assert_eq!(state.view.phase(), ViewPhase::NoZone);
        assert_eq!(state.view.orientation, state.options.idle_orientation());
    }

    #[test]
    fn cycling_single_variant_zone_is_noop() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(3));
        resolve(&mut state);
        let before = state.view.clone();

        cycle_variant(&mut state);
        assert_eq!(state.view.variant_index, before.variant_index);
        assert_eq!(state.view.orientation, before.orientation);
    }

    #[test]
    fn cycling_variant_count_times_returns_to_start() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(1));
        resolve(&mut state);
        let start = state.view.orientation;

        let count = state.active_variant_count();
        assert_eq!(count, 3);
        for _ in 0..count {
            cycle_variant(&mut state);
        }
        assert_eq!(state.view.variant_index, 0);
        assert_eq!(state.view.orientation, start);
    }

    #[test]
    fn cycle_available_requires_session_and_multiple_variants() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(1));
        resolve(&mut state);
        assert!(!cycle_available(&state));

        state.mode = Some(SessionMode::Sandbox);
        assert!(cycle_available(&state));

        move_center_to_zone(&mut state, ZoneId(3));
        resolve(&mut state);
        assert!(!cycle_available(&state));
    }

    #[test]
    fn neutral_index_detected_modulo_count() {
        let mut state = sample_state();
        move_center_to_zone(&mut state, ZoneId(1));
        resolve(&mut state);
        assert!(!is_neutral(&state));

        cycle_variant(&mut state);
        cycle_variant(&mut state);
        assert!(is_neutral(&state));

        state.options.neutral_variant_index = None;
        assert!(!is_neutral(&state));
    }

    #[test]
    fn resolve_schedules_connector_recompute() {
        let mut state = sample_state();
        assert!(!state.connector.scheduler.is_pending());
        resolve(&mut state);
        assert!(state.connector.scheduler.is_pending());
    }
}
