use super::super::state::StageLayout;
use crate::core::ZoneId;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Layout der Bühne wurde (neu) gemeldet
    LayoutChanged { layout: StageLayout },
    /// Ziehen des Schallkopfs beginnt (Pointer-Down)
    InstrumentDragStarted,
    /// Schallkopf gezogen; linke obere Ecke relativ zum Container, noch ungeklemmt
    InstrumentDragged { top_left: glam::Vec2 },
    /// Schallkopf losgelassen (Pointer-Up)
    InstrumentDropped,
    /// Marker auf dem Bild angeklickt
    MarkerClicked {
        answer_tag: String,
        zone: Option<ZoneId>,
    },
    /// Nächste Variante der aktiven Zone anzeigen
    CycleViewRequested,
    /// Rückmeldung bestätigt, weiter zur nächsten Frage
    NextQuestionRequested,
    /// Richtige Antwort nach Fehlversuch aufdecken
    RevealAnswerRequested,
    /// Abschluss-Effekt wurde abgespielt
    CelebrationShown,
    /// Quiz-Modus starten
    EnterQuizModeRequested,
    /// Sandbox-Modus starten
    EnterSandboxModeRequested,
    /// Sitzung neu starten
    RestartRequested,
    /// Zurück zum Menü
    ExitToMenuRequested,
    /// Frame-Grenze erreicht (Layout hat sich gesetzt)
    FrameTick,
    /// Anwendung beenden
    ExitRequested,
}
