//! Top-Menü (Session, Help).

use crate::app::AppIntent;
use crate::shared::SimulatorScene;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, scene: &SimulatorScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Session", |ui| {
                if ui.button("Start Quiz").clicked() {
                    events.push(AppIntent::EnterQuizModeRequested);
                    ui.close();
                }

                if ui.button("Start Sandbox").clicked() {
                    events.push(AppIntent::EnterSandboxModeRequested);
                    ui.close();
                }

                ui.separator();

                let in_session = scene.mode.is_some();

                if ui
                    .add_enabled(in_session, egui::Button::new("Restart"))
                    .clicked()
                {
                    events.push(AppIntent::RestartRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(in_session, egui::Button::new("Back to Menu"))
                    .clicked()
                {
                    events.push(AppIntent::ExitToMenuRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                ui.label("Drag the probe onto a zone of the body diagram.");
                ui.label("Quiz: click the marker that answers the question.");
                ui.label("Sandbox: click markers to see their names.");
                ui.label("\"Switch view\" cycles through the views of a zone.");
            });
        });
    });

    events
}
