//! Quizfragen in fester Reihenfolge.

use super::orientation::OrientationKey;
use super::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// Eine Quizfrage. Wird strikt in Reihenfolge abgearbeitet und nie verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Fragetext
    pub text: String,
    /// Erwartete Orientierung
    pub key: OrientationKey,
    /// Erwartete Zone
    pub correct_position: ZoneId,
    /// Erwartetes Antwort-Tag
    pub correct_answer: String,
    /// Bild mit eingezeichneter richtiger Antwort
    pub answer_image: String,
}

impl Question {
    /// Prüft einen Klick gegen die erwartete (Zone, Antwort)-Kombination.
    pub fn is_correct(&self, zone: Option<ZoneId>, answer_tag: &str) -> bool {
        zone == Some(self.correct_position) && answer_tag == self.correct_answer
    }
}
