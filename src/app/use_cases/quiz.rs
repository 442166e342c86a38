//! Use-Case-Funktionen für den Quiz-Ablauf und die Sandbox-Hervorhebung.

use crate::app::{AppState, QuizPhase, QuizState};
use crate::core::{SessionMode, ZoneId};

/// Setzt das Quiz auf die erste Frage zurück.
pub fn reset(state: &mut AppState) {
    state.quiz = QuizState::default();
    enter_question(state);
}

/// Betritt die Frage am aktuellen Index oder schließt das Quiz ab.
fn enter_question(state: &mut AppState) {
    state.quiz.reveal_visible = false;
    if state.quiz.question_index < state.catalog.question_count() {
        state.quiz.phase = QuizPhase::AwaitingAnswer;
    } else {
        complete(state);
    }
}

/// Bewertet einen Marker-Klick gegen die aktuelle Frage.
///
/// Pro Frage fällt genau eine Entscheidung; weitere Klicks während der
/// Rückmeldung werden ignoriert.
pub fn submit_answer(state: &mut AppState, answer_tag: &str, zone: Option<ZoneId>) {
    if state.mode != Some(SessionMode::Quiz) {
        log::debug!("Antwort außerhalb des Quiz-Modus ignoriert");
        return;
    }
    if state.quiz.phase != QuizPhase::AwaitingAnswer {
        log::debug!("Antwort ignoriert, Frage bereits entschieden ({:?})", state.quiz.phase);
        return;
    }
    let Some(question) = state.catalog.question(state.quiz.question_index) else {
        log::warn!("Keine Frage bei Index {}", state.quiz.question_index);
        return;
    };

    let correct = question.is_correct(zone, answer_tag);
    if correct {
        state.quiz.score += 1;
    }
    state.quiz.phase = QuizPhase::FeedbackShown { correct };
    log::debug!(
        "Frage {}: '{}' in Zone {:?} → {}",
        state.quiz.question_index + 1,
        answer_tag,
        zone,
        if correct { "richtig" } else { "falsch" }
    );
}

/// Deckt nach einer falschen Antwort die richtige Lösung auf.
pub fn reveal_answer(state: &mut AppState) {
    if state.quiz.phase == (QuizPhase::FeedbackShown { correct: false }) {
        state.quiz.reveal_visible = true;
    }
}

/// Geht nach der Rückmeldung zur nächsten Frage über.
pub fn advance(state: &mut AppState) {
    if !state.quiz.feedback_active() {
        log::debug!("Weiter ignoriert im Zustand {:?}", state.quiz.phase);
        return;
    }
    state.quiz.question_index += 1;
    enter_question(state);
}

/// Quittiert den einmaligen Abschluss-Effekt.
pub fn clear_celebration(state: &mut AppState) {
    state.quiz.celebration_pending = false;
}

/// Abschluss-Text ("3 out of 5"), nur im abgeschlossenen Quiz.
pub fn summary(state: &AppState) -> Option<String> {
    state.quiz.is_completed().then(|| {
        format!(
            "{} out of {}",
            state.quiz.score,
            state.catalog.question_count()
        )
    })
}

fn complete(state: &mut AppState) {
    if state.quiz.is_completed() {
        return;
    }
    state.quiz.phase = QuizPhase::Completed;
    state.quiz.celebration_pending = true;
    log::info!(
        "Quiz abgeschlossen: {} von {} richtig",
        state.quiz.score,
        state.catalog.question_count()
    );
}

/// Sandbox: hebt den angeklickten Marker hervor und zeigt sein Label an.
///
/// Ein zuvor hervorgehobener Marker verliert die Hervorhebung.
pub fn highlight_marker(state: &mut AppState, answer_tag: &str) {
    if state.mode != Some(SessionMode::Sandbox) {
        return;
    }
    let Some(zone) = state.view.active_zone else {
        return;
    };
    let label = state
        .catalog
        .markers(state.view.orientation, zone)
        .iter()
        .find(|m| m.tag == answer_tag)
        .map(|m| m.label.clone());

    match label {
        Some(label) => {
            state.sandbox.highlighted_tag = Some(answer_tag.to_string());
            state.sandbox.display_label = Some(label);
        }
        None => log::debug!("Marker '{}' nicht im aktuellen Bild", answer_tag),
    }
}
