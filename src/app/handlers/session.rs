//! Handler für Moduswechsel und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SessionMode;

/// Startet eine Sitzung im gegebenen Modus.
pub fn start(state: &mut AppState, mode: SessionMode) {
    use_cases::session::start(state, mode);
}

/// Startet die laufende Sitzung neu.
pub fn restart(state: &mut AppState) {
    use_cases::session::restart(state);
}

/// Kehrt ins Menü zurück.
pub fn exit_to_menu(state: &mut AppState) {
    use_cases::session::exit_to_menu(state);
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    use_cases::session::request_exit(state);
}
