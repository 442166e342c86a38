//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::SimulatorScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Bühne & Schallkopf ===
            AppCommand::SetStageLayout { layout } => {
                handlers::view::set_stage_layout(state, layout)
            }
            AppCommand::BeginInstrumentDrag => handlers::view::begin_instrument_drag(state),
            AppCommand::MoveInstrument { top_left } => {
                handlers::view::move_instrument(state, top_left)
            }
            AppCommand::EndInstrumentDrag => handlers::view::end_instrument_drag(state),

            // === Ansicht ===
            AppCommand::ResolveView => handlers::view::resolve_view(state),
            AppCommand::CycleVariant => handlers::view::cycle_variant(state),
            AppCommand::AdvanceFrame => handlers::view::advance_frame(state),

            // === Quiz & Sandbox ===
            AppCommand::SubmitAnswer { answer_tag, zone } => {
                handlers::quiz::submit_answer(state, &answer_tag, zone)
            }
            AppCommand::HighlightMarker { answer_tag } => {
                handlers::quiz::highlight_marker(state, &answer_tag)
            }
            AppCommand::AdvanceQuestion => handlers::quiz::advance_question(state),
            AppCommand::RevealAnswer => handlers::quiz::reveal_answer(state),
            AppCommand::ClearCelebration => handlers::quiz::clear_celebration(state),

            // === Sitzung & Anwendungssteuerung ===
            AppCommand::StartSession { mode } => handlers::session::start(state, mode),
            AppCommand::RestartSession => handlers::session::restart(state),
            AppCommand::ExitToMenu => handlers::session::exit_to_menu(state),
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Simulator-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> SimulatorScene {
        render_scene::build(state)
    }
}
