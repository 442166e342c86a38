//! Use-Case-Funktionen für Moduswechsel, Neustart und Rückkehr ins Menü.

use super::{connector, quiz, view_resolution};
use crate::app::{AppState, InstrumentState, SandboxState};
use crate::core::SessionMode;

/// Beginnt eine Sitzung im gegebenen Modus.
///
/// Quiz startet immer bei Frage 1 mit Punktestand 0. Sandbox lässt
/// Punktestand und Fragenindex unberührt.
pub fn start(state: &mut AppState, mode: SessionMode) {
    log::info!("Sitzung gestartet: {}", mode.label());
    state.mode = Some(mode);
    state.sandbox = SandboxState::default();
    if mode == SessionMode::Quiz {
        quiz::reset(state);
    }
    view_resolution::resolve(state);
}

/// Setzt die laufende Sitzung vollständig zurück; der Modus bleibt.
pub fn restart(state: &mut AppState) {
    log::info!("Sitzung neu gestartet");
    reset_all(state);
}

/// Verlässt die Sitzung und kehrt ins Menü zurück.
pub fn exit_to_menu(state: &mut AppState) {
    log::info!("Zurück zum Menü");
    reset_all(state);
    state.mode = None;
}

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

fn reset_all(state: &mut AppState) {
    quiz::reset(state);
    state.quiz.celebration_pending = false;
    state.sandbox = SandboxState::default();
    state.instrument = InstrumentState::default();
    state.connector.curve = None;
    view_resolution::reset(state);
    connector::request(state);
}
