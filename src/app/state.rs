//! Application State — zentrale Datenhaltung einer Sitzung.

use super::recompute::RecomputeScheduler;
use super::CommandLog;
use crate::core::{
    ContentCatalog, CubicCurve, OrientationKey, ScreenRect, SessionMode, SurfaceFrame, ZoneId,
    ZoneRegion,
};
use crate::shared::SimulatorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Layoutabhängige Eingaben, die das UI jeden Frame neu meldet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageLayout {
    /// Container, in dem der Schallkopf bewegt wird (Viewport-Koordinaten)
    pub container: ScreenRect,
    /// Zonen-Rechtecke in Definitionsreihenfolge
    pub zones: Vec<ZoneRegion>,
    /// Zeichenfläche der Kabelkurve (`None` = noch nicht gelayoutet)
    pub surface: Option<SurfaceFrame>,
    /// Fester Quellpunkt der Kabelkurve (Geräte-Symbol)
    pub source_anchor: Vec2,
}

/// Zustand des Schallkopfs auf der Bühne
#[derive(Debug, Clone, Default)]
pub struct InstrumentState {
    /// Linke obere Ecke relativ zum Container (bereits geklemmt)
    pub top_left: Vec2,
    /// Wird gerade gezogen
    pub dragging: bool,
}

/// Zustände der Ansicht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Schallkopf liegt auf keiner Zone
    NoZone,
    /// Zone betreten, mit aktuellem Varianten-Index
    ZoneEntered { zone: ZoneId, variant_index: usize },
}

/// Aufgelöste Position und Orientierung
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktive Zone
    pub active_zone: Option<ZoneId>,
    /// Index der aktiven Variante (0 nach jedem Zonenwechsel)
    pub variant_index: usize,
    /// Aktuelle Orientierung (Ruhe-Orientierung ohne Zone)
    pub orientation: OrientationKey,
}

impl ViewState {
    /// Erstellt den Ruhezustand mit der gegebenen Orientierung.
    pub fn idle(orientation: OrientationKey) -> Self {
        Self {
            active_zone: None,
            variant_index: 0,
            orientation,
        }
    }

    /// Aktueller Zustand der Ansicht
    pub fn phase(&self) -> ViewPhase {
        match self.active_zone {
            Some(zone) => ViewPhase::ZoneEntered {
                zone,
                variant_index: self.variant_index,
            },
            None => ViewPhase::NoZone,
        }
    }
}

/// Zustände des Quiz-Ablaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Wartet auf einen Marker-Klick
    #[default]
    AwaitingAnswer,
    /// Rückmeldung wird angezeigt
    FeedbackShown { correct: bool },
    /// Alle Fragen beantwortet
    Completed,
}

/// Fortschritt im Quiz
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    /// 0-basierter Index der aktuellen Frage
    pub question_index: usize,
    /// Anzahl richtig beantworteter Fragen
    pub score: u32,
    /// Aktueller Ablauf-Zustand
    pub phase: QuizPhase,
    /// Lösung wurde nach falscher Antwort aufgedeckt
    pub reveal_visible: bool,
    /// Abschluss-Effekt steht noch aus
    pub celebration_pending: bool,
}

impl QuizState {
    /// Gibt zurück, ob für die aktuelle Frage bereits entschieden wurde.
    pub fn feedback_active(&self) -> bool {
        matches!(self.phase, QuizPhase::FeedbackShown { .. })
    }

    /// Gibt zurück, ob das Quiz abgeschlossen ist.
    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }
}

/// Hervorhebung im Sandbox-Modus
#[derive(Debug, Clone, Default)]
pub struct SandboxState {
    /// Tag des hervorgehobenen Markers
    pub highlighted_tag: Option<String>,
    /// Anzeige-Label des zuletzt angeklickten Markers
    pub display_label: Option<String>,
}

/// Kabelkurve und ihre verzögerte Neuberechnung
#[derive(Debug, Clone, Default)]
pub struct ConnectorState {
    /// Zuletzt berechnete Kurve (Zeichenflächen-Koordinaten)
    pub curve: Option<CubicCurve>,
    /// Versionszähler für verzögerte Neuberechnung
    pub scheduler: RecomputeScheduler,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Read-only Inhaltskatalog
    pub catalog: Arc<ContentCatalog>,
    /// Aktiver Modus (`None` = Menü)
    pub mode: Option<SessionMode>,
    /// Zuletzt gemeldetes Layout
    pub layout: StageLayout,
    /// Schallkopf-Position
    pub instrument: InstrumentState,
    /// Aufgelöste Ansicht
    pub view: ViewState,
    /// Quiz-Fortschritt
    pub quiz: QuizState,
    /// Sandbox-Hervorhebung
    pub sandbox: SandboxState,
    /// Kabelkurve
    pub connector: ConnectorState,
    /// Laufzeit-Optionen
    pub options: SimulatorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen Zustand im Menü.
    pub fn new(catalog: Arc<ContentCatalog>, options: SimulatorOptions) -> Self {
        Self {
            catalog,
            mode: None,
            layout: StageLayout::default(),
            instrument: InstrumentState::default(),
            view: ViewState::idle(options.idle_orientation()),
            quiz: QuizState::default(),
            sandbox: SandboxState::default(),
            connector: ConnectorState {
                curve: None,
                scheduler: RecomputeScheduler::new(options.recompute_settle_frames),
            },
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Schallkopf-Rechteck in Viewport-Koordinaten
    pub fn instrument_rect(&self) -> ScreenRect {
        ScreenRect::from_min_size(
            self.layout.container.min + self.instrument.top_left,
            self.options.instrument_size_vec(),
        )
    }

    /// Schallkopf-Mittelpunkt in Viewport-Koordinaten
    pub fn instrument_center(&self) -> Vec2 {
        self.instrument_rect().center()
    }

    /// Radius des umschließenden Kreises des Schallkopfs
    pub fn instrument_radius(&self) -> f32 {
        self.options.instrument_size_vec().min_element() * 0.5
    }

    /// Anzahl der Varianten der aktiven Zone (0 ohne Zone)
    pub fn active_variant_count(&self) -> usize {
        self.view
            .active_zone
            .map_or(0, |zone| self.catalog.variant_count(zone))
    }
}
