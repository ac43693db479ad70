//! Interactive terminal form: Elm-style model/update/render with a blocking
//! crossterm runtime.

#![allow(missing_docs)]

pub mod input;
pub mod layout;
pub mod model;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod update;

pub use runtime::{FormRuntimeConfig, run_form};
