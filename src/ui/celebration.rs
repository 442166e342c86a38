//! Kurzer kosmetischer Effekt nach Abschluss des Quiz.

use crate::app::AppIntent;

const DURATION_SECS: f64 = 2.5;
const PARTICLES: usize = 48;

/// Konfetti-Animation; rein kosmetisch, ohne Einfluss auf den Zustand.
#[derive(Default)]
pub struct Celebration {
    started_at: Option<f64>,
}

impl Celebration {
    /// Erstellt einen inaktiven Effekt.
    pub fn new() -> Self {
        Self { started_at: None }
    }

    /// Gibt zurück, ob der Effekt gerade läuft.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Startet den Effekt bei Bedarf und zeichnet ihn.
    ///
    /// Beim Start wird `CelebrationShown` gemeldet, damit der Effekt genau einmal läuft.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        area: egui::Rect,
        requested: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let now = ctx.input(|i| i.time);

        if requested && self.started_at.is_none() {
            self.started_at = Some(now);
            events.push(AppIntent::CelebrationShown);
        }

        let Some(started) = self.started_at else {
            return events;
        };
        let elapsed = now - started;
        if elapsed > DURATION_SECS {
            self.started_at = None;
            return events;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("celebration"),
        ));
        let t = (elapsed / DURATION_SECS) as f32;

        for i in 0..PARTICLES {
            // Deterministische Streuung über goldenen Winkel
            let phase = i as f32 * 2.399_963;
            let x = area.min.x + area.width() * (0.5 + 0.45 * phase.sin());
            let fall = area.height() * (t * (0.8 + 0.4 * (phase * 0.5).cos().abs()));
            let y = area.min.y - 20.0 + fall;
            let color = egui::Color32::from_rgb(
                (120.0 + 120.0 * phase.cos().abs()) as u8,
                (80.0 + 160.0 * (phase * 1.3).sin().abs()) as u8,
                (90.0 + 150.0 * (phase * 0.7).cos().abs()) as u8,
            );
            painter.circle_filled(egui::pos2(x, y), 5.0, color.gamma_multiply(1.0 - t));
        }

        ctx.request_repaint();
        events
    }
}
