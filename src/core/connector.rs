//! Geometrie der Kabelkurve zwischen Ultraschallgerät und Schallkopf.
//!
//! Reine Funktionen: die Anwendungsschicht liefert Mittelpunkt, Radius,
//! Orientierung und den festen Quellpunkt und bekommt eine kubische Kurve zurück.

use super::orientation::{OrientationKey, TailSide};
use glam::Vec2;

/// Parameter der Kontrollpunkt-Platzierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Horizontaler Anteil der Spannweite (Seite A: beide Kontrollpunkte, Seite B: zweiter)
    pub primary_fraction: f32,
    /// Horizontaler Anteil des ersten Kontrollpunkts bei Seite B
    pub secondary_fraction: f32,
    /// Vertikaler Zug der Kontrollpunkte als Anteil der vertikalen Spannweite
    pub vertical_bias: f32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            primary_fraction: 0.7,
            secondary_fraction: 0.5,
            vertical_bias: 0.25,
        }
    }
}

/// Kubische Bézier-Kurve (Start, zwei Kontrollpunkte, Ende).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl CubicCurve {
    /// Wendet eine Punkt-Abbildung auf alle vier Punkte an.
    pub fn map(self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self {
            start: f(self.start),
            control1: f(self.control1),
            control2: f(self.control2),
            end: f(self.end),
        }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn point_at(&self, t: f32) -> Vec2 {
        let inv = 1.0 - t;
        inv * inv * inv * self.start
            + 3.0 * inv * inv * t * self.control1
            + 3.0 * inv * t * t * self.control2
            + t * t * t * self.end
    }

    /// Die vier Punkte in Reihenfolge
    pub fn points(&self) -> [Vec2; 4] {
        [self.start, self.control1, self.control2, self.end]
    }
}

/// Richtungsvektor eines Winkels: 0° zeigt nach oben, im Uhrzeigersinn (Y nach unten).
pub fn direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Ankerpunkt der Kabelkurve am Schallkopf.
///
/// Liegt auf dem umschließenden Kreis: Seite A beim Winkel, Seite B um 180°
/// versetzt. In der neutralen (senkrechten) Variante fällt der Anker auf den Mittelpunkt.
pub fn instrument_anchor(center: Vec2, radius: f32, key: OrientationKey, neutral: bool) -> Vec2 {
    if neutral {
        return center;
    }
    let angle = f32::from(key.angle) + key.tail.anchor_offset_deg();
    center + direction(angle) * radius
}

/// Baut die Kabelkurve von `source` (Gerät) nach `target` (Schallkopf-Anker).
pub fn connector_curve(source: Vec2, target: Vec2, tail: TailSide, params: CurveParams) -> CubicCurve {
    let span = target - source;
    let bias = params.vertical_bias * span.y;

    let (control1, control2) = match tail {
        TailSide::Up => (
            Vec2::new(source.x + params.primary_fraction * span.x, source.y + bias),
            Vec2::new(source.x + params.primary_fraction * span.x, target.y - bias),
        ),
        TailSide::Down => (
            Vec2::new(source.x + params.secondary_fraction * span.x, source.y - bias),
            Vec2::new(source.x + params.primary_fraction * span.x, target.y + bias),
        ),
    };

    CubicCurve {
        start: source,
        control1,
        control2,
        end: target,
    }
}
