//! SonoSim Trainer.
//!
//! Lern-Simulator: Schallkopf auf ein Körperschema ziehen, das passende
//! Ultraschallbild ansehen und Fragen per Marker-Klick beantworten.

use eframe::egui;
use sono_trainer::{load_or_embedded, ui, AppController, AppIntent, AppState, SimulatorOptions};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("SonoSim Trainer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("SonoSim Trainer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "SonoSim Trainer",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                let app = TrainerApp::new()?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TrainerApp {
    state: AppState,
    controller: AppController,
    stage: ui::StageView,
    celebration: ui::Celebration,
}

impl TrainerApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulatorOptions::config_path();
        let options = SimulatorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Vorlage zum Anpassen anlegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        let catalog = load_or_embedded(options.catalog_path.as_deref().map(Path::new))?;
        log::info!(
            "Katalog bereit: {} Zonen, {} Fragen",
            catalog.zone_count(),
            catalog.question_count()
        );

        Ok(Self {
            state: AppState::new(Arc::new(catalog), options),
            controller: AppController::new(),
            stage: ui::StageView::new(),
            celebration: ui::Celebration::new(),
        })
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::LayoutChanged { .. } | AppIntent::FrameTick));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl TrainerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let scene = self.controller.build_render_scene(&self.state);

        events.extend(ui::render_menu(ctx, &scene));
        ui::render_status_bar(ctx, &scene);
        events.extend(ui::render_image_panel(ctx, &self.state, &scene));
        events.extend(ui::show_feedback_dialog(ctx, &scene));
        events.extend(ui::show_summary_dialog(ctx, &scene));

        let mut stage_area = egui::Rect::NOTHING;
        egui::CentralPanel::default().show(ctx, |ui| {
            stage_area = ui.max_rect();
            events.extend(self.stage.show(ui, &self.state, &scene));
        });

        events.extend(self.celebration.show(ctx, stage_area, scene.celebrate));

        // Frame-Grenze: verzögerte Kurven-Neuberechnung weiterschalten
        events.push(AppIntent::FrameTick);

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.connector.scheduler.is_pending()
            || self.celebration.is_running()
        {
            ctx.request_repaint();
        }
    }
}
