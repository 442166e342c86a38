//! Orientierung des Schallkopfs: Winkel, Markerseite und Varianten je Zone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seite, auf der die Kabel-/Markerseite des Schallkopfs liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailSide {
    /// Seite A: Anker liegt beim Winkel selbst
    #[default]
    Up,
    /// Seite B: Anker liegt um 180° versetzt
    Down,
}

impl TailSide {
    /// Kurzname für Logs und Schlüssel-Anzeige
    pub fn as_str(self) -> &'static str {
        match self {
            TailSide::Up => "up",
            TailSide::Down => "down",
        }
    }

    /// Anzeigetext im UI
    pub fn label(self) -> &'static str {
        match self {
            TailSide::Up => "Tail up",
            TailSide::Down => "Tail down",
        }
    }

    /// Winkelversatz des Verbindungsankers in Grad
    pub fn anchor_offset_deg(self) -> f32 {
        match self {
            TailSide::Up => 0.0,
            TailSide::Down => 180.0,
        }
    }
}

/// Zusammengesetzter Schlüssel (Winkel, Seite) für Bild- und Marker-Lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OrientationKey {
    /// Winkel in Grad, `[0, 360)`
    pub angle: u16,
    /// Markerseite
    pub tail: TailSide,
}

impl OrientationKey {
    /// Erstellt einen Schlüssel
    pub fn new(angle: u16, tail: TailSide) -> Self {
        Self { angle, tail }
    }

    /// Uhrzeit-Darstellung des Winkels ("10 o'clock" für 300°)
    pub fn clock_label(&self) -> String {
        format!("{} o'clock", clock_hour(self.angle))
    }
}

impl fmt::Display for OrientationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.angle, self.tail.as_str())
    }
}

/// Rundet einen Winkel auf die nächste Stunde eines Zifferblatts (1..=12).
pub fn clock_hour(angle: u16) -> u16 {
    let hour = ((u32::from(angle) + 15) / 30) % 12;
    if hour == 0 {
        12
    } else {
        hour as u16
    }
}

/// Eine an einer Zone verfügbare Orientierung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Winkel in Grad
    pub angle: u16,
    /// Markerseite
    pub tail: TailSide,
    /// Name der Schnittebene (z.B. "Long axis")
    #[serde(rename = "view")]
    pub view_name: String,
}

impl Variant {
    /// Orientierungs-Schlüssel dieser Variante
    pub fn key(&self) -> OrientationKey {
        OrientationKey::new(self.angle, self.tail)
    }
}
