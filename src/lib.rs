//! # Suncurve Library
//!
//! Internal library for the suncurve binary.
//!
//! This library exists to enable testing of the pipeline internals and
//! provide clean separation between CLI dispatch (main.rs) and application
//! logic.
//!
//! ## Architecture
//!
//! - **Geographic**: `geo` module with the embedded gazetteer, coordinate
//!   parsing, and timezone resolution
//! - **Solar**: `solar` module computing per-day sunrise/sunset times with a
//!   polar day/night guard
//! - **Table**: `table` module assembling the memoized full-year table
//! - **Chart**: `chart` module rendering the SVG chart and PNG rasterization
//! - **Pipeline**: `pipeline` module tying resolution, table build, and
//!   rendering into one explicit recompute path
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for the render/table/cities commands
//! - **Infrastructure**: logging and CLI parsing

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod chart;
pub mod commands;
pub mod config;
pub mod geo;
pub mod pipeline;
pub mod solar;
pub mod table;
