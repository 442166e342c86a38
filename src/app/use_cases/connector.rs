//! Use-Case-Funktionen für die Kabelkurve zwischen Gerät und Schallkopf.

use super::view_resolution;
use crate::app::recompute::RecomputeTicket;
use crate::app::AppState;
use crate::core::geometry::surface_transform;
use crate::core::{connector_curve, instrument_anchor};

/// Fordert eine verzögerte Neuberechnung an (nach Positions- oder Orientierungswechsel).
pub fn request(state: &mut AppState) -> RecomputeTicket {
    state.connector.scheduler.request()
}

/// Schaltet eine Frame-Grenze weiter und führt eine fällige Neuberechnung aus.
pub fn advance_frame(state: &mut AppState) {
    if let Some(ticket) = state.connector.scheduler.tick() {
        run(state, ticket);
    }
}

/// Führt die Neuberechnung für ein Ticket aus, sofern es noch aktuell ist.
pub fn run(state: &mut AppState, ticket: RecomputeTicket) {
    if !state.connector.scheduler.is_current(ticket) {
        log::trace!("Veraltete Kurven-Neuberechnung verworfen: {:?}", ticket);
        return;
    }
    recompute(state);
}

/// Berechnet die Kabelkurve sofort aus dem aktuellen Zustand.
///
/// Die Abbildung auf die Zeichenfläche wird bei jedem Aufruf neu abgeleitet.
pub fn recompute(state: &mut AppState) {
    let neutral = view_resolution::is_neutral(state);
    let anchor = instrument_anchor(
        state.instrument_center(),
        state.instrument_radius(),
        state.view.orientation,
        neutral,
    );

    let curve = connector_curve(
        state.layout.source_anchor,
        anchor,
        state.view.orientation.tail,
        state.options.curve_params(),
    );

    let transform = surface_transform(state.layout.surface.as_ref());
    state.connector.curve = Some(curve.map(|p| transform.transform_point2(p)));
}
