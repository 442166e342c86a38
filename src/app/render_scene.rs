//! Builder für Simulator-Szenen aus dem AppState.

use crate::app::use_cases::{quiz, view_resolution};
use crate::app::{AppState, QuizPhase};
use crate::core::{Question, SessionMode};
use crate::shared::{
    FeedbackView, MarkerView, OrientationLabels, QuestionView, SceneImage, SimulatorScene,
};

const MENU_PROMPT: &str = "Choose Quiz or Sandbox to start";
const NO_ZONE_PROMPT: &str = "Place the probe on a zone";

/// Baut eine SimulatorScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> SimulatorScene {
    let zone = state.view.active_zone;
    let key = state.view.orientation;

    let prompt = match (state.mode, zone) {
        (None, _) => Some(MENU_PROMPT.to_string()),
        (Some(_), None) => Some(NO_ZONE_PROMPT.to_string()),
        (Some(_), Some(_)) => None,
    };

    // Kein Inhalt für (Orientierung, Zone) ist ein regulärer Zustand
    let content = zone.and_then(|zone| state.catalog.view(key, zone));
    let image = match (zone, content) {
        (None, _) => SceneImage::Idle,
        (Some(_), Some(content)) => SceneImage::Image(content.image_path.clone()),
        (Some(_), None) => SceneImage::NoContent,
    };

    let highlighted = match state.mode {
        Some(SessionMode::Sandbox) => state.sandbox.highlighted_tag.as_deref(),
        _ => None,
    };
    let markers = content
        .map(|content| {
            content
                .markers
                .iter()
                .map(|m| MarkerView {
                    x_pct: m.x,
                    y_pct: m.y,
                    label: m.label.clone(),
                    tag: m.tag.clone(),
                    highlighted: highlighted == Some(m.tag.as_str()),
                })
                .collect()
        })
        .unwrap_or_default();

    let zone_def = zone.and_then(|zone| state.catalog.zone(zone));
    let view_name = zone
        .and_then(|zone| state.catalog.variant(zone, state.view.variant_index))
        .map(|variant| variant.view_name.clone());
    let orientation = OrientationLabels {
        clock_label: key.clock_label(),
        tail_label: key.tail.label().to_string(),
        view_name,
        zone_name: zone_def.map(|def| def.name.clone()),
    };

    let cycle_label = view_resolution::cycle_available(state).then(|| {
        let count = state.active_variant_count();
        format!("{} of {}", state.view.variant_index % count + 1, count)
    });

    let in_quiz = state.mode == Some(SessionMode::Quiz);
    let current_question = state.catalog.question(state.quiz.question_index);
    let question = match current_question {
        Some(q) if in_quiz && !state.quiz.is_completed() => Some(QuestionView {
            number: state.quiz.question_index + 1,
            total: state.catalog.question_count(),
            text: q.text.clone(),
        }),
        _ => None,
    };

    let feedback = match (state.quiz.phase, current_question) {
        (QuizPhase::FeedbackShown { correct }, Some(q)) if in_quiz => {
            Some(build_feedback(state, q, correct))
        }
        _ => None,
    };

    let sandbox_label = match state.mode {
        Some(SessionMode::Sandbox) => state.sandbox.display_label.clone(),
        _ => None,
    };

    let layout_known = state.layout.container.size().min_element() > 0.0;

    SimulatorScene {
        mode: state.mode,
        prompt,
        image,
        markers,
        orientation,
        instrument_angle_deg: f32::from(key.angle),
        instrument_rect: layout_known.then(|| state.instrument_rect()),
        connector: state.connector.curve,
        surface: state.layout.surface,
        cycle_label,
        question,
        feedback,
        summary: if in_quiz { quiz::summary(state) } else { None },
        sandbox_label,
        score: state.quiz.score,
        celebrate: in_quiz && state.quiz.celebration_pending,
    }
}

fn build_feedback(state: &AppState, question: &Question, correct: bool) -> FeedbackView {
    if correct {
        return FeedbackView {
            correct,
            text: "Correct!".to_string(),
            reveal_available: false,
            reveal_image: None,
        };
    }

    let text = if state.quiz.reveal_visible {
        let label = state
            .catalog
            .markers(question.key, question.correct_position)
            .iter()
            .find(|m| m.tag == question.correct_answer)
            .map_or(question.correct_answer.as_str(), |m| m.label.as_str());
        let zone_name = state
            .catalog
            .zone(question.correct_position)
            .map_or("?", |zone| zone.name.as_str());
        format!(
            "Incorrect. The answer is {} ({}, {}, {}).",
            label,
            zone_name,
            question.key.clock_label(),
            question.key.tail.label()
        )
    } else {
        "Incorrect.".to_string()
    };

    FeedbackView {
        correct,
        text,
        reveal_available: !state.quiz.reveal_visible,
        reveal_image: state
            .quiz
            .reveal_visible
            .then(|| question.answer_image.clone()),
    }
}
