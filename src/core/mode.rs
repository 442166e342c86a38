//! Sitzungsmodus des Simulators.

/// Modus einer Sitzung, wird beim Einstieg festgelegt und bleibt bis zum Menü bestehen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Quiz mit Bewertung und Fragenfolge
    Quiz,
    /// Freies Erkunden ohne Bewertung
    Sandbox,
}

impl SessionMode {
    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            SessionMode::Quiz => "Quiz",
            SessionMode::Sandbox => "Sandbox",
        }
    }
}
