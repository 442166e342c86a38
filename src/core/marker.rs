/// Klickbarer Marker auf einem Ultraschallbild.
/// Gehört zu genau einem (Orientierung, Zone)-Bild und trägt ein Antwort-Tag.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageMarker {
    /// Horizontale Position in Prozent der Bildbreite
    pub x: f32,
    /// Vertikale Position in Prozent der Bildhöhe
    pub y: f32,
    /// Anzeigename (z.B. "Left ventricle")
    pub label: String,
    /// Antwort-Tag, eindeutig innerhalb der Markerliste
    pub tag: String,
}

impl ImageMarker {
    /// Erstellt einen neuen Marker
    pub fn new(x: f32, y: f32, label: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            tag: tag.into(),
        }
    }
}
