//! Agricultural crop production dashboard.
//!
//! The data layer (`data`) is independent of egui and can be driven from
//! tests or other binaries; `app`, `state` and `ui` wire it into an eframe
//! window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
