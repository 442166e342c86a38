//! Modale Fenster: Rückmeldung zur Antwort und Quiz-Abschluss.

use crate::app::AppIntent;
use crate::shared::SimulatorScene;

const CORRECT_COLOR: egui::Color32 = egui::Color32::from_rgb(60, 170, 90);
const WRONG_COLOR: egui::Color32 = egui::Color32::from_rgb(210, 70, 60);

/// Zeigt die Rückmeldung zur aktuellen Frage.
pub fn show_feedback_dialog(ctx: &egui::Context, scene: &SimulatorScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(feedback) = &scene.feedback else {
        return events;
    };

    egui::Window::new("Feedback")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color = if feedback.correct {
                CORRECT_COLOR
            } else {
                WRONG_COLOR
            };
            ui.label(
                egui::RichText::new(feedback.text.as_str())
                    .color(color)
                    .size(18.0),
            );

            if let Some(image) = &feedback.reveal_image {
                ui.add(egui::Image::new(format!("file://{image}")).max_width(320.0));
            }

            ui.separator();
            ui.horizontal(|ui| {
                if feedback.reveal_available && ui.button("Show answer").clicked() {
                    events.push(AppIntent::RevealAnswerRequested);
                }
                if ui.button("Next question").clicked() {
                    events.push(AppIntent::NextQuestionRequested);
                }
            });
        });

    events
}

/// Zeigt die Zusammenfassung nach der letzten Frage.
pub fn show_summary_dialog(ctx: &egui::Context, scene: &SimulatorScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(summary) = &scene.summary else {
        return events;
    };

    egui::Window::new("Quiz complete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Your score").weak());
                ui.heading(summary.as_str());
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    events.push(AppIntent::RestartRequested);
                }
                if ui.button("Back to Menu").clicked() {
                    events.push(AppIntent::ExitToMenuRequested);
                }
            });
        });

    events
}
