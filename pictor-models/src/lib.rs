//! Per-model configuration records for Pictor display and input drivers
//!
//! Display controllers and touch devices each need a small block of
//! geometry and timing data. Instead of an ad hoc constant set per model,
//! the shape is described once ([`panel`], [`input`]) and instantiated
//! per supported model ([`models`]), one cargo feature per model.
//!
//! The records are plain data: drivers consume them, nothing here
//! produces or mutates them at runtime.

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod models;
pub mod panel;

pub use input::{CapacitiveTouchConfig, ResistiveTouchConfig};
pub use models::{DisplayModel, InputModel};
pub use panel::{
    AxisTiming, BusSupport, ColorDepth, FbdevConfig, Orientation, PanelConfig, PanelTiming,
};
