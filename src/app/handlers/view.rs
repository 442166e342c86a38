//! Handler für Bühnen-Layout, Schallkopf, Ansicht und Kabelkurve.

use crate::app::use_cases;
use crate::app::{AppState, StageLayout};

/// Übernimmt ein neues Bühnen-Layout.
pub fn set_stage_layout(state: &mut AppState, layout: StageLayout) {
    use_cases::instrument::set_layout(state, layout);
}

/// Startet das Ziehen des Schallkopfs.
pub fn begin_instrument_drag(state: &mut AppState) {
    use_cases::instrument::begin_drag(state);
}

/// Verschiebt den Schallkopf auf eine geklemmte Position.
pub fn move_instrument(state: &mut AppState, top_left: glam::Vec2) {
    use_cases::instrument::move_to(state, top_left);
}

/// Beendet das Ziehen und löst die Ansicht an der Endposition auf.
pub fn end_instrument_drag(state: &mut AppState) {
    use_cases::instrument::end_drag(state);
    use_cases::view_resolution::resolve(state);
}

/// Löst Zone und Variante an der aktuellen Position auf.
pub fn resolve_view(state: &mut AppState) {
    use_cases::view_resolution::resolve(state);
}

/// Schaltet zur nächsten Variante der aktiven Zone.
pub fn cycle_variant(state: &mut AppState) {
    use_cases::view_resolution::cycle_variant(state);
}

/// Schaltet eine Frame-Grenze weiter (verzögerte Kurven-Neuberechnung).
pub fn advance_frame(state: &mut AppState) {
    use_cases::connector::advance_frame(state);
}
