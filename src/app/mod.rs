//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod recompute;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Schallkopf, Ansicht, Quiz).
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use recompute::{RecomputeScheduler, RecomputeTicket};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, ConnectorState, InstrumentState, QuizPhase, QuizState, SandboxState, StageLayout,
    ViewPhase, ViewState,
};
