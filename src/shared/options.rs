//! Zentrale Konfiguration für den Schallkopf-Trainer.
//!
//! `SimulatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveParams, OrientationKey, TailSide};
use serde::{Deserialize, Serialize};

// ── Ruhe-Orientierung ───────────────────────────────────────────────

/// Winkel des Schallkopfs, solange keine Zone aktiv ist.
pub const IDLE_ANGLE: u16 = 0;
/// Markerseite des Schallkopfs, solange keine Zone aktiv ist.
pub const IDLE_TAIL: TailSide = TailSide::Up;
/// Varianten-Index, der die neutrale (senkrechte) Haltung markiert.
pub const NEUTRAL_VARIANT_INDEX: usize = 2;

// ── Kabelkurve ──────────────────────────────────────────────────────

/// Horizontaler Spannweiten-Anteil (Seite A, zweiter Punkt Seite B).
pub const CURVE_SPAN_FRACTION_PRIMARY: f32 = 0.7;
/// Horizontaler Spannweiten-Anteil des ersten Punkts bei Seite B.
pub const CURVE_SPAN_FRACTION_SECONDARY: f32 = 0.5;
/// Vertikaler Zug der Kontrollpunkte (Anteil der vertikalen Spannweite).
pub const CURVE_VERTICAL_BIAS: f32 = 0.25;
/// Frames bis zur Neuberechnung der Kurve nach einer Änderung.
pub const RECOMPUTE_SETTLE_FRAMES: u32 = 2;

// ── Bühne ───────────────────────────────────────────────────────────

/// Größe des Schallkopf-Elements in Pixeln.
pub const INSTRUMENT_SIZE: [f32; 2] = [64.0, 64.0];
/// Logische Größe der Zeichenfläche für die Kabelkurve.
pub const SURFACE_LOGICAL_SIZE: [f32; 2] = [1000.0, 1000.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Simulator-Optionen.
/// Wird als `sono_trainer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorOptions {
    // ── Orientierung ────────────────────────────────────────────
    /// Winkel in Ruhe (keine Zone aktiv)
    pub idle_angle: u16,
    /// Markerseite in Ruhe
    pub idle_tail: TailSide,
    /// Varianten-Index der neutralen Haltung (`None` = deaktiviert)
    #[serde(default = "default_neutral_variant_index")]
    pub neutral_variant_index: Option<usize>,

    // ── Kabelkurve ──────────────────────────────────────────────
    /// Horizontaler Spannweiten-Anteil (primär)
    pub curve_span_fraction_primary: f32,
    /// Horizontaler Spannweiten-Anteil (sekundär)
    pub curve_span_fraction_secondary: f32,
    /// Vertikaler Zug der Kontrollpunkte
    pub curve_vertical_bias: f32,
    /// Frames bis zur Neuberechnung
    #[serde(default = "default_recompute_settle_frames")]
    pub recompute_settle_frames: u32,

    // ── Bühne ───────────────────────────────────────────────────
    /// Größe des Schallkopfs in Pixeln
    pub instrument_size: [f32; 2],
    /// Logische Größe der Zeichenfläche
    pub surface_logical_size: [f32; 2],

    // ── Inhalte ─────────────────────────────────────────────────
    /// Pfad zum Inhaltskatalog (JSON); `None` = eingebetteter Katalog
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            idle_angle: IDLE_ANGLE,
            idle_tail: IDLE_TAIL,
            neutral_variant_index: Some(NEUTRAL_VARIANT_INDEX),

            curve_span_fraction_primary: CURVE_SPAN_FRACTION_PRIMARY,
            curve_span_fraction_secondary: CURVE_SPAN_FRACTION_SECONDARY,
            curve_vertical_bias: CURVE_VERTICAL_BIAS,
            recompute_settle_frames: RECOMPUTE_SETTLE_FRAMES,

            instrument_size: INSTRUMENT_SIZE,
            surface_logical_size: SURFACE_LOGICAL_SIZE,

            catalog_path: None,
        }
    }
}

/// Serde-Default für `neutral_variant_index` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_neutral_variant_index() -> Option<usize> {
    Some(NEUTRAL_VARIANT_INDEX)
}

/// Serde-Default für `recompute_settle_frames`.
fn default_recompute_settle_frames() -> u32 {
    RECOMPUTE_SETTLE_FRAMES
}

impl SimulatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("sono_trainer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("sono_trainer.toml")
    }

    /// Orientierung in Ruhe
    pub fn idle_orientation(&self) -> OrientationKey {
        OrientationKey::new(self.idle_angle, self.idle_tail)
    }

    /// Parameter der Kontrollpunkt-Platzierung
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            primary_fraction: self.curve_span_fraction_primary,
            secondary_fraction: self.curve_span_fraction_secondary,
            vertical_bias: self.curve_vertical_bias,
        }
    }

    /// Schallkopf-Größe als Vektor
    pub fn instrument_size_vec(&self) -> glam::Vec2 {
        glam::Vec2::from(self.instrument_size)
    }
}
