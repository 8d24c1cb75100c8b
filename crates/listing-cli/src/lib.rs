//! Library components of the listing converter CLI.

pub mod batch;
pub mod config;
pub mod logging;
