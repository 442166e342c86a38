//! Zonen: feste Ablagebereiche auf dem Körperschema und deren Auflösung.

use super::geometry::ScreenRect;
use super::orientation::Variant;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kennung einer Zone (1..N)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Statische Zonen-Definition aus dem Inhaltskatalog.
#[derive(Debug, Clone)]
pub struct ZoneDefinition {
    /// Zonen-ID
    pub id: ZoneId,
    /// Anzeigename (z.B. "Parasternal")
    pub name: String,
    /// Bereich in Anteilen des Körperschemas `[x0, y0, x1, y1]`
    pub bounds: [f32; 4],
    /// Geordnete, nicht-leere Liste der Orientierungs-Varianten
    pub variants: Vec<Variant>,
}

impl ZoneDefinition {
    /// Anzahl der Varianten (laut Katalog-Validierung immer >= 1)
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }
}

/// Zone mit ihrem aktuellen Bildschirm-Rechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneRegion {
    /// Zonen-ID
    pub id: ZoneId,
    /// Rechteck in Viewport-Koordinaten
    pub rect: ScreenRect,
}

impl ZoneRegion {
    /// Rechnet alle Zonen-Definitionen auf das aktuelle Rechteck des Körperschemas um.
    ///
    /// Die Reihenfolge der Definitionen bleibt erhalten.
    pub fn layout_all<'a>(
        diagram_rect: ScreenRect,
        definitions: impl IntoIterator<Item = &'a ZoneDefinition>,
    ) -> Vec<ZoneRegion> {
        definitions
            .into_iter()
            .map(|def| ZoneRegion {
                id: def.id,
                rect: diagram_rect.sub_rect(def.bounds),
            })
            .collect()
    }
}

/// Liefert die Zone, deren Rechteck den Punkt enthält.
///
/// Bei Überlappung gewinnt die erste Zone in Definitionsreihenfolge.
pub fn resolve_zone(point: Vec2, regions: &[ZoneRegion]) -> Option<ZoneId> {
    regions
        .iter()
        .find(|region| region.rect.contains(point))
        .map(|region| region.id)
}
