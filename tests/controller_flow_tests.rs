mod common;

use common::{click_marker, drag_probe_to_zone, send, setup};
use sono_trainer::{
    AppCommand, AppIntent, OrientationKey, QuizPhase, SessionMode, TailSide, ViewPhase, ZoneId,
};

#[test]
fn test_first_question_scored_when_answered_in_right_view() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);

    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    assert_eq!(
        state.view.orientation,
        OrientationKey::new(300, TailSide::Up)
    );

    click_marker(&mut controller, &mut state, "G");

    assert_eq!(state.quiz.score, 1);
    assert_eq!(state.quiz.phase, QuizPhase::FeedbackShown { correct: true });
}

#[test]
fn test_wrong_marker_offers_reveal_without_scoring() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));

    click_marker(&mut controller, &mut state, "F");
    assert_eq!(state.quiz.score, 0);
    assert_eq!(state.quiz.phase, QuizPhase::FeedbackShown { correct: false });

    let scene = controller.build_render_scene(&state);
    let feedback = scene.feedback.expect("Rückmeldung sichtbar");
    assert!(feedback.reveal_available);

    send(&mut controller, &mut state, AppIntent::RevealAnswerRequested);
    let scene = controller.build_render_scene(&state);
    let feedback = scene.feedback.expect("Rückmeldung sichtbar");
    assert!(feedback.reveal_image.is_some());

    // Weitere Klicks ändern die Entscheidung nicht mehr
    click_marker(&mut controller, &mut state, "G");
    assert_eq!(state.quiz.score, 0);
}

#[test]
fn test_full_quiz_all_correct_yields_five_out_of_five() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);

    // (Zone, Anzahl Umschaltungen, Tag)
    let answers = [(2, 0, "G"), (1, 0, "A"), (1, 1, "E"), (3, 0, "N"), (4, 0, "O")];
    for (zone, cycles, tag) in answers {
        drag_probe_to_zone(&mut controller, &mut state, ZoneId(zone));
        for _ in 0..cycles {
            send(&mut controller, &mut state, AppIntent::CycleViewRequested);
        }
        click_marker(&mut controller, &mut state, tag);
        assert_eq!(state.quiz.phase, QuizPhase::FeedbackShown { correct: true });
        send(&mut controller, &mut state, AppIntent::NextQuestionRequested);
    }

    assert_eq!(state.quiz.phase, QuizPhase::Completed);
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.summary.as_deref(), Some("5 out of 5"));
    assert!(scene.celebrate);

    send(&mut controller, &mut state, AppIntent::CelebrationShown);
    assert!(!controller.build_render_scene(&state).celebrate);

    // Weiter nach Abschluss bleibt wirkungslos
    send(&mut controller, &mut state, AppIntent::NextQuestionRequested);
    assert_eq!(state.quiz.phase, QuizPhase::Completed);
    assert_eq!(state.quiz.score, 5);
}

#[test]
fn test_next_question_without_answer_is_ignored() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);

    send(&mut controller, &mut state, AppIntent::NextQuestionRequested);
    assert_eq!(state.quiz.question_index, 0);
    assert_eq!(state.quiz.phase, QuizPhase::AwaitingAnswer);
}

#[test]
fn test_restart_resets_score_index_and_orientation() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    click_marker(&mut controller, &mut state, "G");
    send(&mut controller, &mut state, AppIntent::NextQuestionRequested);

    send(&mut controller, &mut state, AppIntent::RestartRequested);

    assert_eq!(state.mode, Some(SessionMode::Quiz));
    assert_eq!(state.quiz.question_index, 0);
    assert_eq!(state.quiz.score, 0);
    assert_eq!(state.view.phase(), ViewPhase::NoZone);
    assert_eq!(state.view.orientation, state.options.idle_orientation());
    assert!(state.sandbox.highlighted_tag.is_none());
}

#[test]
fn test_exit_to_menu_ignores_marker_clicks() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);
    send(&mut controller, &mut state, AppIntent::ExitToMenuRequested);
    assert_eq!(state.mode, None);

    let logged = state.command_log.total_recorded();
    click_marker(&mut controller, &mut state, "G");
    assert_eq!(state.command_log.total_recorded(), logged);
    assert_eq!(state.quiz.score, 0);
}

#[test]
fn test_sandbox_click_highlights_without_scoring() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));

    click_marker(&mut controller, &mut state, "F");
    click_marker(&mut controller, &mut state, "G");

    let scene = controller.build_render_scene(&state);
    let highlighted: Vec<_> = scene
        .markers
        .iter()
        .filter(|m| m.highlighted)
        .map(|m| m.tag.as_str())
        .collect();
    assert_eq!(highlighted, vec!["G"]);
    assert_eq!(scene.sandbox_label.as_deref(), Some("Left ventricle"));
    assert_eq!(state.quiz.score, 0);
    assert!(scene.feedback.is_none());
}

#[test]
fn test_sandbox_entry_keeps_quiz_progress() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    click_marker(&mut controller, &mut state, "G");
    send(&mut controller, &mut state, AppIntent::NextQuestionRequested);

    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    assert_eq!(state.mode, Some(SessionMode::Sandbox));
    assert_eq!(state.quiz.question_index, 1);
    assert_eq!(state.quiz.score, 1);
}

#[test]
fn test_drag_lifecycle_is_logged_in_order() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(3));

    let tail: Vec<_> = state
        .command_log
        .entries()
        .iter()
        .rev()
        .take(4)
        .collect();
    assert!(matches!(tail[0], AppCommand::EndInstrumentDrag));
    assert!(matches!(tail[1], AppCommand::ResolveView));
    assert!(matches!(tail[2], AppCommand::MoveInstrument { .. }));
    assert!(matches!(tail[3], AppCommand::BeginInstrumentDrag));
    assert!(!state.instrument.dragging);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = setup();
    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_idle_frames_do_not_fill_command_log() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));

    // Ausstehende Neuberechnung abarbeiten
    send(&mut controller, &mut state, AppIntent::FrameTick);
    send(&mut controller, &mut state, AppIntent::FrameTick);
    assert!(state.connector.curve.is_some());
    assert!(!state.connector.scheduler.is_pending());

    let logged = state.command_log.total_recorded();
    for _ in 0..50 {
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }
    assert_eq!(state.command_log.total_recorded(), logged);
}
