//! Use-Cases der Application-Layer-Orchestrierung.

pub mod connector;
pub mod instrument;
pub mod quiz;
pub mod session;
pub mod view_resolution;
