//! Bühne: Körperschema mit Zonen, Ultraschallgerät, Schallkopf und Kabel.
//!
//! Meldet jedes Frame das aktuelle Layout und übersetzt das Ziehen des
//! Schallkopfs in `AppIntent`s.

use crate::app::{AppIntent, AppState, StageLayout};
use crate::core::connector::direction;
use crate::core::{ScreenRect, SurfaceFrame, ZoneRegion};
use crate::shared::SimulatorScene;
use glam::Vec2;

const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(232, 196, 170);
const ZONE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(60, 120, 200, 70);
const ZONE_ACTIVE_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(60, 160, 90, 110);
const PROBE_COLOR: egui::Color32 = egui::Color32::from_rgb(70, 70, 80);
const TAIL_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 80, 60);
const CABLE_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);

/// Größe des Geräte-Symbols in Pixeln
const MACHINE_SIZE: egui::Vec2 = egui::vec2(70.0, 90.0);

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_vec(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

fn to_screen_rect(rect: egui::Rect) -> ScreenRect {
    ScreenRect::from_min_max(to_vec(rect.min), to_vec(rect.max))
}

fn to_egui_rect(rect: ScreenRect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos(rect.min), to_pos(rect.max))
}

/// Verwaltet den Drag-Zustand des Schallkopfs.
#[derive(Default)]
pub struct StageView {
    /// Abstand Pointer → linke obere Ecke beim Greifen
    grab_offset: Option<Vec2>,
}

impl StageView {
    /// Erstellt eine neue Bühne ohne laufenden Drag.
    pub fn new() -> Self {
        Self { grab_offset: None }
    }

    /// Zeichnet die Bühne und gibt erzeugte Events zurück.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        scene: &SimulatorScene,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let (container, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let layout = compute_layout(state, container);
        let painter = ui.painter_at(container);

        painter.rect_filled(container, 4.0, egui::Color32::from_gray(245));
        let diagram = body_rect(container);
        painter.rect_filled(diagram.shrink(diagram.width() * 0.12), 40.0, BODY_COLOR);

        for region in &layout.zones {
            let active = state.view.active_zone == Some(region.id);
            let rect = to_egui_rect(region.rect);
            painter.rect_filled(
                rect,
                6.0,
                if active { ZONE_ACTIVE_COLOR } else { ZONE_COLOR },
            );
            if let Some(def) = state.catalog.zone(region.id) {
                painter.text(
                    rect.center_top() + egui::vec2(0.0, 2.0),
                    egui::Align2::CENTER_TOP,
                    &def.name,
                    egui::FontId::proportional(11.0),
                    egui::Color32::from_gray(40),
                );
            }
        }

        draw_machine(&painter, to_pos(layout.source_anchor));

        if let (Some(curve), Some(surface)) = (scene.connector, layout.surface) {
            if let Some(to_viewport) = surface.surface_to_viewport() {
                let points = curve.points().map(|p| to_pos(to_viewport.transform_point2(p)));
                painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
                    points,
                    false,
                    egui::Color32::TRANSPARENT,
                    egui::Stroke::new(3.0, CABLE_COLOR),
                ));
            }
        }

        if scene.mode.is_some() {
            if let Some(rect) = scene.instrument_rect {
                events.extend(self.handle_probe(ui, to_egui_rect(rect), &layout));
                draw_probe(&painter, to_egui_rect(rect), scene, state);
            }
        }

        events.push(AppIntent::LayoutChanged { layout });
        events
    }

    fn handle_probe(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        layout: &StageLayout,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let response = ui
            .interact(rect, ui.id().with("probe"), egui::Sense::drag())
            .on_hover_cursor(egui::CursorIcon::Grab);

        let pointer = response.interact_pointer_pos().map(to_vec);

        if response.drag_started() {
            if let Some(pointer) = pointer {
                self.grab_offset = Some(pointer - to_vec(rect.min));
            }
            events.push(AppIntent::InstrumentDragStarted);
        }

        if response.dragged() {
            if let (Some(pointer), Some(grab)) = (pointer, self.grab_offset) {
                events.push(AppIntent::InstrumentDragged {
                    top_left: pointer - grab - layout.container.min,
                });
            }
        }

        if response.drag_stopped() {
            self.grab_offset = None;
            events.push(AppIntent::InstrumentDropped);
        }

        events
    }
}

/// Rechteck des Körperschemas innerhalb der Bühne (links, quadratisch).
fn body_rect(container: egui::Rect) -> egui::Rect {
    let side = container.height().min(container.width() * 0.75);
    egui::Rect::from_min_size(
        container.min + egui::vec2(container.width() * 0.05, 0.0),
        egui::vec2(side, side),
    )
}

/// Leitet das Layout der Bühne aus dem aktuellen Rechteck ab.
fn compute_layout(state: &AppState, container: egui::Rect) -> StageLayout {
    let diagram = to_screen_rect(body_rect(container));
    let machine_center = container.right_bottom() - MACHINE_SIZE * 0.5 - egui::vec2(16.0, 16.0);

    StageLayout {
        container: to_screen_rect(container),
        zones: ZoneRegion::layout_all(diagram, state.catalog.zones()),
        surface: Some(SurfaceFrame {
            screen_rect: to_screen_rect(container),
            logical_size: Vec2::from(state.options.surface_logical_size),
        }),
        source_anchor: to_vec(machine_center),
    }
}

fn draw_machine(painter: &egui::Painter, center: egui::Pos2) {
    let body = egui::Rect::from_center_size(center, MACHINE_SIZE);
    painter.rect_filled(body, 6.0, egui::Color32::from_gray(90));
    let screen = egui::Rect::from_min_size(
        body.min + egui::vec2(8.0, 8.0),
        egui::vec2(MACHINE_SIZE.x - 16.0, MACHINE_SIZE.y * 0.45),
    );
    painter.rect_filled(screen, 3.0, egui::Color32::from_gray(20));
}

fn draw_probe(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &SimulatorScene,
    state: &AppState,
) {
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.5;
    let stroke_color = if state.instrument.dragging {
        egui::Color32::YELLOW
    } else {
        egui::Color32::WHITE
    };

    painter.circle(
        center,
        radius,
        PROBE_COLOR,
        egui::Stroke::new(2.0, stroke_color),
    );

    // Nadel zeigt den Winkel, der Punkt die Markerseite
    let dir = direction(scene.instrument_angle_deg);
    let tip = center + egui::vec2(dir.x, dir.y) * radius * 0.8;
    painter.line_segment([center, tip], egui::Stroke::new(3.0, egui::Color32::WHITE));

    let tail_dir =
        direction(scene.instrument_angle_deg + state.view.orientation.tail.anchor_offset_deg());
    let tail = center + egui::vec2(tail_dir.x, tail_dir.y) * radius * 0.55;
    painter.circle_filled(tail, 5.0, TAIL_COLOR);
}
