//! Core-Domänentypen: Zonen, Orientierungen, Katalog, Geometrie, Kabelkurve.

pub mod catalog;
pub mod connector;
/// Geometrie-Hilfen (Rechtecke, Clamping, Viewport → Zeichenfläche)
pub mod geometry;
pub mod marker;
pub mod mode;
pub mod orientation;
pub mod question;
pub mod zone;

pub use catalog::{ContentCatalog, ViewContent};
pub use connector::{connector_curve, instrument_anchor, CubicCurve, CurveParams};
pub use geometry::{clamp_to_container, ScreenRect, SurfaceFrame};
pub use marker::ImageMarker;
pub use mode::SessionMode;
pub use orientation::{OrientationKey, TailSide, Variant};
pub use question::Question;
pub use zone::{resolve_zone, ZoneDefinition, ZoneId, ZoneRegion};
