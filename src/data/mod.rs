//! JSON-Import des Inhaltskatalogs.
//!
//! Der Katalog (Zonen, Bilder mit Markern, Fragen) wird einmal beim Start
//! geladen. Ein Standardkatalog ist in die Binary eingebettet.

pub mod parser;

pub use parser::{load_catalog, parse_catalog};

use crate::core::ContentCatalog;
use anyhow::{Context, Result};
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Parst den eingebetteten Standardkatalog.
pub fn embedded_catalog() -> Result<ContentCatalog> {
    parse_catalog(EMBEDDED_CATALOG).context("Eingebetteter Katalog ist ungueltig")
}

/// Lädt den Katalog aus `path`; ohne Pfad oder bei Fehlern den eingebetteten.
///
/// Ein defekter externer Katalog ist nicht fatal, der Fehler wird geloggt.
pub fn load_or_embedded(path: Option<&Path>) -> Result<ContentCatalog> {
    if let Some(path) = path {
        match load_catalog(path) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => log::error!(
                "Katalog {} konnte nicht geladen werden, verwende eingebetteten: {:#}",
                path.display(),
                e
            ),
        }
    }
    embedded_catalog()
}
