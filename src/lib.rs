//! Premium Predictor: a terminal client for an insurance premium category
//! prediction service.
//!
//! The library validates applicant details, POSTs them as JSON to a remote
//! endpoint, and turns the reply into a [`predict::RenderedResult`] that the
//! one-shot command and the interactive form both draw.

pub mod core;
pub mod predict;
pub mod present;

#[cfg(feature = "cli")]
pub mod cli_app;
#[cfg(feature = "cli")]
pub mod logger;
#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::errors::{PredictorError, Result};
