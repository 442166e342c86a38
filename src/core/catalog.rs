//! Inhaltskatalog: Zonen mit Varianten, Bilder/Marker je (Orientierung, Zone)
//! und die Fragenliste.
//!
//! Der Katalog wird einmal beim Start geladen und danach nur gelesen.

use super::marker::ImageMarker;
use super::orientation::{OrientationKey, Variant};
use super::question::Question;
use super::zone::{ZoneDefinition, ZoneId};
use anyhow::{bail, Result};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Bild und Markerliste für eine (Orientierung, Zone)-Kombination.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContent {
    /// Pfad des vorgerenderten Bildes
    pub image_path: String,
    /// Klickbare Marker auf dem Bild
    pub markers: Vec<ImageMarker>,
}

/// Read-only Nachschlagetabellen des Simulators.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    zones: IndexMap<ZoneId, ZoneDefinition>,
    views: HashMap<(OrientationKey, ZoneId), ViewContent>,
    questions: Vec<Question>,
}

impl ContentCatalog {
    /// Baut einen Katalog und prüft dessen Invarianten.
    pub fn new(
        zones: Vec<ZoneDefinition>,
        views: Vec<(OrientationKey, ZoneId, ViewContent)>,
        questions: Vec<Question>,
    ) -> Result<Self> {
        let mut zone_map = IndexMap::with_capacity(zones.len());
        for zone in zones {
            validate_zone(&zone)?;
            let id = zone.id;
            if zone_map.insert(id, zone).is_some() {
                bail!("Zone {} ist mehrfach definiert", id);
            }
        }

        let mut view_map = HashMap::with_capacity(views.len());
        for (key, zone, content) in views {
            if !zone_map.contains_key(&zone) {
                bail!("Bild {} verweist auf unbekannte Zone {}", key, zone);
            }
            validate_angle(key.angle)?;
            validate_markers(key, zone, &content.markers)?;
            if view_map.insert((key, zone), content).is_some() {
                bail!("Bild für {} in Zone {} ist mehrfach definiert", key, zone);
            }
        }

        for (index, question) in questions.iter().enumerate() {
            if !zone_map.contains_key(&question.correct_position) {
                bail!(
                    "Frage {} verweist auf unbekannte Zone {}",
                    index + 1,
                    question.correct_position
                );
            }
            validate_angle(question.key.angle)?;
        }

        let catalog = Self {
            zones: zone_map,
            views: view_map,
            questions,
        };
        catalog.warn_unanswerable_questions();
        Ok(catalog)
    }

    /// Zonen in Definitionsreihenfolge
    pub fn zones(&self) -> impl Iterator<Item = &ZoneDefinition> {
        self.zones.values()
    }

    /// Anzahl definierter Zonen
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Zonen-Definition per ID
    pub fn zone(&self, id: ZoneId) -> Option<&ZoneDefinition> {
        self.zones.get(&id)
    }

    /// Anzahl der Varianten einer Zone (0 für unbekannte Zonen)
    pub fn variant_count(&self, id: ZoneId) -> usize {
        self.zone(id).map_or(0, ZoneDefinition::variant_count)
    }

    /// Variante `index` (modulo Variantenanzahl) einer Zone
    pub fn variant(&self, id: ZoneId, index: usize) -> Option<&Variant> {
        let zone = self.zone(id)?;
        if zone.variants.is_empty() {
            return None;
        }
        zone.variants.get(index % zone.variants.len())
    }

    /// Bildinhalt für (Orientierung, Zone); `None` ist ein gültiger Leer-Zustand.
    pub fn view(&self, key: OrientationKey, zone: ZoneId) -> Option<&ViewContent> {
        self.views.get(&(key, zone))
    }

    /// Markerliste für (Orientierung, Zone); leer wenn kein Inhalt existiert.
    pub fn markers(&self, key: OrientationKey, zone: ZoneId) -> &[ImageMarker] {
        self.view(key, zone)
            .map(|v| v.markers.as_slice())
            .unwrap_or_default()
    }

    /// Anzahl belegter (Orientierung, Zone)-Kombinationen
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Frage per Index
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Anzahl der Fragen
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn warn_unanswerable_questions(&self) {
        for (index, q) in self.questions.iter().enumerate() {
            let answerable = self
                .markers(q.key, q.correct_position)
                .iter()
                .any(|m| m.tag == q.correct_answer);
            if !answerable {
                log::warn!(
                    "Frage {}: kein Marker '{}' für {} in Zone {}",
                    index + 1,
                    q.correct_answer,
                    q.key,
                    q.correct_position
                );
            }
        }
    }
}

fn validate_angle(angle: u16) -> Result<()> {
    if angle >= 360 {
        bail!("Ungueltiger Winkel {} (erlaubt: 0..360)", angle);
    }
    Ok(())
}

fn validate_zone(zone: &ZoneDefinition) -> Result<()> {
    // Zonen sind ab 1 nummeriert
    if zone.id.0 == 0 {
        bail!("Zone \"{}\" hat die ungueltige ID 0", zone.name);
    }
    if zone.variants.is_empty() {
        bail!("Zone {} hat keine Varianten", zone.id);
    }
    for variant in &zone.variants {
        validate_angle(variant.angle)?;
    }
    let [x0, y0, x1, y1] = zone.bounds;
    let in_unit = |v: f32| (0.0..=1.0).contains(&v);
    if !(in_unit(x0) && in_unit(y0) && in_unit(x1) && in_unit(y1)) || x0 >= x1 || y0 >= y1 {
        bail!("Zone {} hat ungueltige Grenzen {:?}", zone.id, zone.bounds);
    }
    Ok(())
}

fn validate_markers(key: OrientationKey, zone: ZoneId, markers: &[ImageMarker]) -> Result<()> {
    let mut seen = HashSet::with_capacity(markers.len());
    for marker in markers {
        if !seen.insert(marker.tag.as_str()) {
            bail!(
                "Marker-Tag '{}' doppelt in Bild {} / Zone {}",
                marker.tag,
                key,
                zone
            );
        }
    }
    Ok(())
}
