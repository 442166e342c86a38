use super::super::state::StageLayout;
use crate::core::{SessionMode, ZoneId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neues Bühnen-Layout übernehmen
    SetStageLayout { layout: StageLayout },
    /// Drag-Lifecycle Start
    BeginInstrumentDrag,
    /// Schallkopf an (geklemmte) Position setzen
    MoveInstrument { top_left: glam::Vec2 },
    /// Drag-Lifecycle Ende
    EndInstrumentDrag,
    /// Zone und Variante aus der Schallkopf-Position neu auflösen
    ResolveView,
    /// Zur nächsten Variante der aktiven Zone wechseln
    CycleVariant,
    /// Quiz: Marker-Klick bewerten
    SubmitAnswer {
        answer_tag: String,
        zone: Option<ZoneId>,
    },
    /// Sandbox: Marker hervorheben und Label anzeigen
    HighlightMarker { answer_tag: String },
    /// Quiz: zur nächsten Frage (oder Abschluss)
    AdvanceQuestion,
    /// Quiz: richtige Antwort aufdecken
    RevealAnswer,
    /// Abschluss-Effekt quittieren
    ClearCelebration,
    /// Sitzung im gegebenen Modus beginnen
    StartSession { mode: SessionMode },
    /// Sitzung zurücksetzen (Modus bleibt)
    RestartSession,
    /// Sitzung verlassen, zurück ins Menü
    ExitToMenu,
    /// Frame-Grenze: fällige Neuberechnungen ausführen
    AdvanceFrame,
    /// Anwendung beenden
    RequestExit,
}
