//! Foundation types shared by every surface: configuration and errors.

pub mod config;
pub mod errors;
