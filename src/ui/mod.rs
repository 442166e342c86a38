//! UI-Komponenten: Menü, Status-Bar, Bühne, Bildbereich, Dialoge.

mod celebration;
pub mod dialogs;
pub mod image_panel;
/// UI-Layer mit egui
///
/// Das UI liest ausschließlich die `SimulatorScene` (und für Layout-Daten
/// den `AppState`) und meldet Eingaben als `AppIntent`s zurück.
pub mod menu;
pub mod stage;
pub mod status;

pub use celebration::Celebration;
pub use dialogs::{show_feedback_dialog, show_summary_dialog};
pub use image_panel::render_image_panel;
pub use menu::render_menu;
pub use stage::StageView;
pub use status::render_status_bar;
