//! Parser für den JSON-Inhaltskatalog.

use crate::core::{
    ContentCatalog, ImageMarker, OrientationKey, Question, TailSide, Variant, ViewContent,
    ZoneDefinition, ZoneId,
};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Dateiformat des Katalogs.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    zones: Vec<ZoneEntry>,
    #[serde(default)]
    images: Vec<ImageEntry>,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ZoneEntry {
    id: ZoneId,
    name: String,
    bounds: [f32; 4],
    variants: Vec<Variant>,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    angle: u16,
    tail: TailSide,
    zone: ZoneId,
    path: String,
    #[serde(default)]
    markers: Vec<ImageMarker>,
}

/// Parst einen Katalog aus einem JSON-String und prüft seine Konsistenz.
pub fn parse_catalog(json: &str) -> Result<ContentCatalog> {
    let file: CatalogFile =
        serde_json::from_str(json).context("Katalog-JSON konnte nicht gelesen werden")?;

    let zones = file
        .zones
        .into_iter()
        .map(|z| ZoneDefinition {
            id: z.id,
            name: z.name,
            bounds: z.bounds,
            variants: z.variants,
        })
        .collect();

    let mut views = Vec::with_capacity(file.images.len());
    for image in file.images {
        let key = OrientationKey::new(image.angle, image.tail);
        for marker in &image.markers {
            check_marker_position(marker)
                .with_context(|| format!("Bild {} in Zone {}", key, image.zone))?;
        }
        views.push((
            key,
            image.zone,
            ViewContent {
                image_path: image.path,
                markers: image.markers,
            },
        ));
    }

    ContentCatalog::new(zones, views, file.questions)
}

/// Lädt und parst einen Katalog von der Festplatte.
pub fn load_catalog(path: &Path) -> Result<ContentCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Katalog {} nicht lesbar", path.display()))?;
    let catalog = parse_catalog(&json)?;
    log::info!(
        "Katalog geladen: {} Zonen, {} Bilder, {} Fragen",
        catalog.zone_count(),
        catalog.view_count(),
        catalog.question_count()
    );
    Ok(catalog)
}

/// Marker-Positionen sind Prozentangaben innerhalb des Bildes.
fn check_marker_position(marker: &ImageMarker) -> Result<()> {
    let in_range = |v: f32| (0.0..=100.0).contains(&v);
    if !in_range(marker.x) || !in_range(marker.y) {
        bail!(
            "Marker '{}' liegt ausserhalb des Bildes ({}%, {}%)",
            marker.tag,
            marker.x,
            marker.y
        );
    }
    Ok(())
}
