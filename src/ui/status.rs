//! Status-Bar am unteren Bildschirmrand.

use crate::shared::SimulatorScene;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, scene: &SimulatorScene) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match scene.mode {
                Some(mode) => ui.label(format!("Mode: {}", mode.label())),
                None => ui.label("Menu"),
            };

            ui.separator();

            let labels = &scene.orientation;
            ui.label(format!("Probe: {} | {}", labels.clock_label, labels.tail_label));

            if let Some(zone) = &labels.zone_name {
                ui.separator();
                ui.label(format!("Zone: {}", zone));
            }

            if let Some(view) = &labels.view_name {
                ui.separator();
                ui.label(format!("View: {}", view));
            }

            if let Some(question) = &scene.question {
                ui.separator();
                ui.label(format!(
                    "Question {} of {} | Score: {}",
                    question.number, question.total, scene.score
                ));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
