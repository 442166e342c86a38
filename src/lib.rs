//! SonoSim Trainer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, QuizPhase, StageLayout, ViewPhase, ViewState,
};
pub use core::{
    ContentCatalog, CubicCurve, OrientationKey, ScreenRect, SessionMode, SurfaceFrame, TailSide,
    ZoneId, ZoneRegion,
};
pub use data::{embedded_catalog, load_catalog, load_or_embedded, parse_catalog};
pub use shared::{SceneImage, SimulatorOptions, SimulatorScene};
