//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases::view_resolution;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{clamp_to_container, SessionMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LayoutChanged { layout } => {
            // Unverändertes Layout darf eine laufende Neuberechnung nicht verdrängen
            if layout == state.layout {
                Vec::new()
            } else {
                vec![
                    AppCommand::SetStageLayout { layout },
                    AppCommand::ResolveView,
                ]
            }
        }
        AppIntent::InstrumentDragStarted => vec![AppCommand::BeginInstrumentDrag],
        AppIntent::InstrumentDragged { top_left } => {
            let clamped = clamp_to_container(
                top_left,
                state.options.instrument_size_vec(),
                state.layout.container.size(),
            );
            vec![
                AppCommand::MoveInstrument { top_left: clamped },
                AppCommand::ResolveView,
            ]
        }
        AppIntent::InstrumentDropped => vec![AppCommand::EndInstrumentDrag],
        AppIntent::MarkerClicked { answer_tag, zone } => match state.mode {
            Some(SessionMode::Quiz) => vec![AppCommand::SubmitAnswer { answer_tag, zone }],
            Some(SessionMode::Sandbox) => vec![AppCommand::HighlightMarker { answer_tag }],
            None => Vec::new(),
        },
        AppIntent::CycleViewRequested => {
            if view_resolution::cycle_available(state) {
                vec![AppCommand::CycleVariant]
            } else {
                Vec::new()
            }
        }
        AppIntent::NextQuestionRequested => vec![AppCommand::AdvanceQuestion],
        AppIntent::RevealAnswerRequested => vec![AppCommand::RevealAnswer],
        AppIntent::CelebrationShown => vec![AppCommand::ClearCelebration],
        AppIntent::EnterQuizModeRequested => vec![AppCommand::StartSession {
            mode: SessionMode::Quiz,
        }],
        AppIntent::EnterSandboxModeRequested => vec![AppCommand::StartSession {
            mode: SessionMode::Sandbox,
        }],
        AppIntent::RestartRequested => vec![AppCommand::RestartSession],
        AppIntent::ExitToMenuRequested => vec![AppCommand::ExitToMenu],
        AppIntent::FrameTick => {
            // Leere Frames nicht ins Command-Log schreiben
            if state.connector.scheduler.is_pending() {
                vec![AppCommand::AdvanceFrame]
            } else {
                Vec::new()
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
