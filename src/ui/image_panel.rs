//! Bildbereich: Ultraschallbild, Marker, Fragen und Varianten-Umschaltung.

use crate::app::{AppIntent, AppState};
use crate::core::SessionMode;
use crate::shared::{MarkerView, SceneImage, SimulatorScene};

const IMAGE_ASPECT: f32 = 4.0 / 3.0;
const MARKER_SIZE: f32 = 26.0;
const HIGHLIGHT_COLOR: egui::Color32 = egui::Color32::from_rgb(250, 200, 40);

/// Rendert das rechte Panel mit Bild und Steuerung.
pub fn render_image_panel(
    ctx: &egui::Context,
    state: &AppState,
    scene: &SimulatorScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("image_panel")
        .resizable(true)
        .default_width(480.0)
        .min_width(320.0)
        .show(ctx, |ui| {
            if scene.mode.is_none() {
                events.extend(render_start_screen(ui, scene));
                return;
            }

            if let Some(question) = &scene.question {
                ui.label(
                    egui::RichText::new(format!(
                        "Question {} / {}",
                        question.number, question.total
                    ))
                    .weak(),
                );
                ui.heading(&question.text);
                ui.separator();
            }

            if let Some(label) = &scene.sandbox_label {
                ui.label(egui::RichText::new(label).strong().size(18.0));
                ui.separator();
            }

            events.extend(render_image(ui, state, scene));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if let Some(cycle) = &scene.cycle_label {
                    if ui.button(format!("Switch view ({})", cycle)).clicked() {
                        events.push(AppIntent::CycleViewRequested);
                    }
                }
                if let Some(view) = &scene.orientation.view_name {
                    ui.label(view);
                }
            });
        });

    events
}

fn render_start_screen(ui: &mut egui::Ui, scene: &SimulatorScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("SonoSim Trainer");
        if let Some(prompt) = &scene.prompt {
            ui.label(prompt);
        }
        ui.add_space(20.0);
        let size = egui::vec2(200.0, 40.0);
        if ui.add_sized(size, egui::Button::new("Quiz")).clicked() {
            events.push(AppIntent::EnterQuizModeRequested);
        }
        if ui.add_sized(size, egui::Button::new("Sandbox")).clicked() {
            events.push(AppIntent::EnterSandboxModeRequested);
        }
    });

    events
}

fn render_image(ui: &mut egui::Ui, state: &AppState, scene: &SimulatorScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, width / IMAGE_ASPECT),
        egui::Sense::hover(),
    );

    match &scene.image {
        SceneImage::Image(path) => {
            egui::Image::new(format!("file://{path}"))
                .fit_to_exact_size(rect.size())
                .paint_at(ui, rect);
            for marker in &scene.markers {
                if render_marker(ui, rect, marker, scene).clicked() {
                    events.push(AppIntent::MarkerClicked {
                        answer_tag: marker.tag.clone(),
                        zone: state.view.active_zone,
                    });
                }
            }
        }
        SceneImage::NoContent => placeholder(ui, rect, "No image for this probe orientation"),
        SceneImage::Idle => placeholder(
            ui,
            rect,
            scene.prompt.as_deref().unwrap_or("Place the probe on a zone"),
        ),
    }

    events
}

fn render_marker(
    ui: &mut egui::Ui,
    image_rect: egui::Rect,
    marker: &MarkerView,
    scene: &SimulatorScene,
) -> egui::Response {
    let center = image_rect.min
        + egui::vec2(
            image_rect.width() * marker.x_pct / 100.0,
            image_rect.height() * marker.y_pct / 100.0,
        );
    let rect = egui::Rect::from_center_size(center, egui::vec2(MARKER_SIZE, MARKER_SIZE));

    let mut button = egui::Button::new(marker.tag.as_str()).corner_radius(MARKER_SIZE * 0.5);
    if marker.highlighted {
        button = button.fill(HIGHLIGHT_COLOR);
    }
    let response = ui.put(rect, button);

    // Im Quiz verrät der Tooltip die Antwort
    if scene.mode == Some(SessionMode::Sandbox) {
        response.on_hover_text(marker.label.as_str())
    } else {
        response
    }
}

fn placeholder(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, egui::Color32::from_gray(30));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(200),
    );
}
