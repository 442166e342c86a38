mod common;

use approx::assert_relative_eq;
use common::{drag_probe_to, drag_probe_to_zone, send, setup, stage_layout, zone_center};
use glam::Vec2;
use sono_trainer::{
    AppIntent, OrientationKey, SceneImage, ScreenRect, SessionMode, TailSide, ViewPhase, ZoneId,
    ZoneRegion,
};

#[test]
fn test_drag_is_clamped_to_container() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);

    send(
        &mut controller,
        &mut state,
        AppIntent::InstrumentDragged {
            top_left: Vec2::new(-200.0, 5000.0),
        },
    );

    assert_eq!(state.instrument.top_left, Vec2::new(0.0, 600.0 - 64.0));
    let rect = state.instrument_rect();
    assert!(rect.min.x >= state.layout.container.min.x);
    assert!(rect.max.y <= state.layout.container.max.y);
}

#[test]
fn test_shrinking_stage_keeps_instrument_inside() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::InstrumentDragged {
            top_left: Vec2::new(900.0, 500.0),
        },
    );

    let mut layout = stage_layout(&state);
    layout.container = ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(500.0, 300.0));
    layout.zones = ZoneRegion::layout_all(
        ScreenRect::from_min_size(Vec2::ZERO, Vec2::new(300.0, 300.0)),
        state.catalog.zones(),
    );
    send(&mut controller, &mut state, AppIntent::LayoutChanged { layout });

    let rect = state.instrument_rect();
    let container = state.layout.container;
    assert!(rect.min.x >= container.min.x && rect.min.y >= container.min.y);
    assert!(rect.max.x <= container.max.x && rect.max.y <= container.max.y);
    assert_eq!(state.instrument.top_left, Vec2::new(436.0, 236.0));
}

#[test]
fn test_zone_switch_resets_variant_and_same_zone_keeps_it() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);

    drag_probe_to_zone(&mut controller, &mut state, ZoneId(1));
    send(&mut controller, &mut state, AppIntent::CycleViewRequested);
    assert_eq!(state.view.variant_index, 1);

    // Bewegung innerhalb der Zone
    let inside = zone_center(&state, ZoneId(1)) + Vec2::new(4.0, -3.0);
    drag_probe_to(&mut controller, &mut state, inside);
    assert_eq!(state.view.variant_index, 1);

    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(1));
    assert_eq!(
        state.view.phase(),
        ViewPhase::ZoneEntered {
            zone: ZoneId(1),
            variant_index: 0
        }
    );
}

#[test]
fn test_cycle_wraps_after_variant_count() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(1));
    let start = state.view.orientation;

    for _ in 0..state.active_variant_count() {
        send(&mut controller, &mut state, AppIntent::CycleViewRequested);
    }

    assert_eq!(state.view.variant_index, 0);
    assert_eq!(state.view.orientation, start);
}

#[test]
fn test_single_variant_zone_hides_cycle_control() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);

    drag_probe_to_zone(&mut controller, &mut state, ZoneId(3));
    assert!(controller.build_render_scene(&state).cycle_label.is_none());

    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.cycle_label.as_deref(), Some("1 of 2"));
}

#[test]
fn test_leaving_all_zones_shows_prompt_and_idle_orientation() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));

    drag_probe_to(&mut controller, &mut state, Vec2::new(800.0, 300.0));

    let scene = controller.build_render_scene(&state);
    assert_eq!(state.view.phase(), ViewPhase::NoZone);
    assert_eq!(scene.image, SceneImage::Idle);
    assert!(scene.prompt.is_some());
    assert_eq!(
        state.view.orientation,
        OrientationKey::new(0, TailSide::Up)
    );
}

#[test]
fn test_neutral_variant_renders_placeholder_and_centered_cable() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(1));
    send(&mut controller, &mut state, AppIntent::CycleViewRequested);
    send(&mut controller, &mut state, AppIntent::CycleViewRequested);

    send(&mut controller, &mut state, AppIntent::FrameTick);
    send(&mut controller, &mut state, AppIntent::FrameTick);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.image, SceneImage::NoContent);

    // Zeichenfläche 1000×600 → 1000×1000 logisch
    let center = state.instrument_center();
    let curve = scene.connector.expect("Kabel berechnet");
    assert_relative_eq!(curve.end.x, center.x, epsilon = 1e-3);
    assert_relative_eq!(curve.end.y, center.y * 1000.0 / 600.0, epsilon = 1e-2);
}

#[test]
fn test_connector_waits_for_two_frames() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterQuizModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));
    assert!(state.connector.curve.is_none());

    send(&mut controller, &mut state, AppIntent::FrameTick);
    assert!(state.connector.curve.is_none());

    send(&mut controller, &mut state, AppIntent::FrameTick);
    let curve = state.connector.curve.expect("Kabel nach zwei Frames");
    // Quelle (950, 550) in logischen Koordinaten
    assert_relative_eq!(curve.start.x, 950.0, epsilon = 1e-3);
    assert_relative_eq!(curve.start.y, 550.0 * 1000.0 / 600.0, epsilon = 1e-2);
}

#[test]
fn test_continuous_drag_still_updates_connector() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    send(&mut controller, &mut state, AppIntent::InstrumentDragStarted);

    for step in 0..6 {
        send(
            &mut controller,
            &mut state,
            AppIntent::InstrumentDragged {
                top_left: Vec2::new(700.0 + step as f32 * 10.0, 200.0),
            },
        );
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }

    assert!(state.connector.curve.is_some());
}

#[test]
fn test_unchanged_layout_does_not_delay_connector() {
    let (mut controller, mut state) = setup();
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    drag_probe_to_zone(&mut controller, &mut state, ZoneId(2));

    for _ in 0..2 {
        let layout = stage_layout(&state);
        send(&mut controller, &mut state, AppIntent::LayoutChanged { layout });
        send(&mut controller, &mut state, AppIntent::FrameTick);
    }

    assert!(state.connector.curve.is_some());
}

#[test]
fn test_missing_surface_falls_back_to_viewport_coordinates() {
    let (mut controller, mut state) = setup();
    let mut layout = stage_layout(&state);
    layout.surface = None;
    send(&mut controller, &mut state, AppIntent::LayoutChanged { layout });
    send(&mut controller, &mut state, AppIntent::EnterSandboxModeRequested);
    send(&mut controller, &mut state, AppIntent::FrameTick);
    send(&mut controller, &mut state, AppIntent::FrameTick);

    let curve = state.connector.curve.expect("Kabel trotz fehlender Zeichenfläche");
    assert_eq!(curve.start, state.layout.source_anchor);
    assert_eq!(state.mode, Some(SessionMode::Sandbox));
}
