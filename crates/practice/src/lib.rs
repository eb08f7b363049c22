//! practice library: application logic shared by the four console programs.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
