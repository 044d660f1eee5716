//! Interactive dashboard on cooks in the U.S. workforce.
//!
//! The data pipeline (fetch → parse → filter → derive → chart spec) lives
//! in [`data`], [`color`], and [`chart`] and is pure: it can be exercised
//! end to end without the UI. [`app`] and [`ui`] wrap it in an egui shell.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
