//! Geometrie-Hilfen: Bildschirm-Rechtecke, Element-Mittelpunkte und die
//! affine Abbildung zwischen Viewport- und Zeichenflächen-Koordinaten.

use glam::{Affine2, Vec2};

/// Achsenparalleles Rechteck in Viewport-Koordinaten (Pixel, Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Rechte untere Ecke
    pub max: Vec2,
}

impl ScreenRect {
    /// Erstellt ein Rechteck aus zwei Ecken (wird normalisiert).
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Erstellt ein Rechteck aus linker oberer Ecke und Größe.
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::from_min_max(min, min + size)
    }

    /// Größe des Rechtecks
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Mittelpunkt der Bounding-Box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt im Rechteck liegt (Ränder inklusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Bildet ein Teil-Rechteck in Anteilen `[x0, y0, x1, y1]` (0..1) auf dieses Rechteck ab.
    pub fn sub_rect(&self, fractions: [f32; 4]) -> Self {
        let size = self.size();
        Self::from_min_max(
            self.min + Vec2::new(fractions[0], fractions[1]) * size,
            self.min + Vec2::new(fractions[2], fractions[3]) * size,
        )
    }
}

/// Begrenzt die linke obere Ecke eines Elements so, dass seine Bounding-Box
/// vollständig im Container bleibt.
///
/// `top_left` ist relativ zum Container. Links und oben werden unabhängig
/// auf `[0, container - element]` geklemmt; ist das Element größer als der
/// Container, landet es bei 0.
pub fn clamp_to_container(top_left: Vec2, element_size: Vec2, container_size: Vec2) -> Vec2 {
    let max = (container_size - element_size).max(Vec2::ZERO);
    top_left.clamp(Vec2::ZERO, max)
}

/// Lage der Zeichenfläche auf dem Bildschirm.
///
/// Die Zeichenfläche hat ein eigenes logisches Koordinatensystem
/// (`logical_size`), das auf `screen_rect` gestreckt dargestellt wird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    /// Aktuelle Bildschirmlage der Zeichenfläche
    pub screen_rect: ScreenRect,
    /// Logische Ausdehnung der Zeichenfläche
    pub logical_size: Vec2,
}

impl SurfaceFrame {
    /// Leitet die Abbildung Viewport → Zeichenfläche ab.
    ///
    /// `None`, solange die Fläche noch kein gültiges Layout hat
    /// (Größe null oder nicht endlich).
    pub fn viewport_to_surface(&self) -> Option<Affine2> {
        let screen_size = self.screen_rect.size();
        let valid = screen_size.x > f32::EPSILON
            && screen_size.y > f32::EPSILON
            && self.logical_size.x > f32::EPSILON
            && self.logical_size.y > f32::EPSILON
            && screen_size.is_finite()
            && self.logical_size.is_finite()
            && self.screen_rect.min.is_finite();
        if !valid {
            return None;
        }

        let scale = self.logical_size / screen_size;
        Some(Affine2::from_scale(scale) * Affine2::from_translation(-self.screen_rect.min))
    }

    /// Umkehrabbildung Zeichenfläche → Viewport (für das Zeichnen im UI).
    pub fn surface_to_viewport(&self) -> Option<Affine2> {
        self.viewport_to_surface().map(|m| m.inverse())
    }
}

/// Liefert die aktuelle Abbildung Viewport → Zeichenfläche.
///
/// Fehlt das Layout der Zeichenfläche, wird die Identität verwendet
/// und eine Warnung geloggt.
pub fn surface_transform(frame: Option<&SurfaceFrame>) -> Affine2 {
    match frame.and_then(SurfaceFrame::viewport_to_surface) {
        Some(m) => m,
        None => {
            log::warn!("Zeichenfläche ohne Layout, verwende Viewport-Koordinaten direkt");
            Affine2::IDENTITY
        }
    }
}

/// Transformiert einen Viewport-Punkt in Zeichenflächen-Koordinaten.
pub fn to_surface(frame: Option<&SurfaceFrame>, p: Vec2) -> Vec2 {
    surface_transform(frame).transform_point2(p)
}
