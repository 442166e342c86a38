//! Simulator-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use crate::core::{CubicCurve, ScreenRect, SessionMode, SurfaceFrame};

/// Anzuzeigendes Ultraschallbild
#[derive(Debug, Clone, PartialEq)]
pub enum SceneImage {
    /// Schallkopf liegt auf keiner Zone, Hinweis statt Bild
    Idle,
    /// Vorgerendertes Bild
    Image(String),
    /// Für diese (Orientierung, Zone) existiert kein Inhalt
    NoContent,
}

/// Ein Marker, wie er über dem Bild dargestellt wird.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    /// Horizontale Position in Prozent
    pub x_pct: f32,
    /// Vertikale Position in Prozent
    pub y_pct: f32,
    /// Anzeigetext
    pub label: String,
    /// Antwort-Tag
    pub tag: String,
    /// Im Sandbox-Modus hervorgehoben
    pub highlighted: bool,
}

/// Beschriftungen der aktuellen Orientierung.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationLabels {
    /// Uhrzeit-Darstellung des Winkels
    pub clock_label: String,
    /// Markerseite als Text
    pub tail_label: String,
    /// Name der Schnittebene (nur mit aktiver Zone)
    pub view_name: Option<String>,
    /// Name der aktiven Zone
    pub zone_name: Option<String>,
}

/// Aktuelle Frage im Quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    /// Laufende Nummer (1-basiert)
    pub number: usize,
    /// Gesamtzahl der Fragen
    pub total: usize,
    /// Fragetext
    pub text: String,
}

/// Rückmeldung nach einem Marker-Klick im Quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    /// Antwort war richtig
    pub correct: bool,
    /// Rückmeldungstext
    pub text: String,
    /// "Lösung zeigen" ist verfügbar
    pub reveal_available: bool,
    /// Lösungsbild (nur wenn aufgedeckt)
    pub reveal_image: Option<String>,
}

/// Read-only Daten für einen UI-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorScene {
    /// Aktiver Modus (`None` = Menü)
    pub mode: Option<SessionMode>,
    /// Hinweistext (z.B. "Place the probe on a zone")
    pub prompt: Option<String>,
    /// Aktuelles Bild
    pub image: SceneImage,
    /// Marker des aktuellen Bildes
    pub markers: Vec<MarkerView>,
    /// Orientierungs-Beschriftungen
    pub orientation: OrientationLabels,
    /// Aktueller Winkel des Schallkopfs in Grad (für die Darstellung)
    pub instrument_angle_deg: f32,
    /// Schallkopf-Rechteck in Viewport-Koordinaten
    pub instrument_rect: Option<ScreenRect>,
    /// Kabelkurve in Zeichenflächen-Koordinaten
    pub connector: Option<CubicCurve>,
    /// Lage der Zeichenfläche (zum Zurückrechnen im UI)
    pub surface: Option<SurfaceFrame>,
    /// Beschriftung der Varianten-Umschaltung ("n of total"), `None` = ausgeblendet
    pub cycle_label: Option<String>,
    /// Aktuelle Frage
    pub question: Option<QuestionView>,
    /// Rückmeldung zur aktuellen Frage
    pub feedback: Option<FeedbackView>,
    /// Abschluss-Zusammenfassung ("score out of total")
    pub summary: Option<String>,
    /// Anzeige-Label im Sandbox-Modus
    pub sandbox_label: Option<String>,
    /// Aktueller Punktestand
    pub score: u32,
    /// Einmaliger Abschluss-Effekt steht an
    pub celebrate: bool,
}

impl SimulatorScene {
    /// Gibt zurück, ob das Bild einen Platzhalter statt Inhalt zeigt.
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self.image, SceneImage::Image(_))
    }
}
