//! Handler für Quiz-Antworten und Sandbox-Hervorhebung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ZoneId;

/// Bewertet eine Antwort auf die aktuelle Frage.
pub fn submit_answer(state: &mut AppState, answer_tag: &str, zone: Option<ZoneId>) {
    use_cases::quiz::submit_answer(state, answer_tag, zone);
}

/// Hebt einen Marker im Sandbox-Modus hervor.
pub fn highlight_marker(state: &mut AppState, answer_tag: &str) {
    use_cases::quiz::highlight_marker(state, answer_tag);
}

/// Geht zur nächsten Frage über.
pub fn advance_question(state: &mut AppState) {
    use_cases::quiz::advance(state);
}

/// Deckt die richtige Lösung auf.
pub fn reveal_answer(state: &mut AppState) {
    use_cases::quiz::reveal_answer(state);
}

/// Quittiert den Abschluss-Effekt.
pub fn clear_celebration(state: &mut AppState) {
    use_cases::quiz::clear_celebration(state);
}
