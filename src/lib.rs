// Library exports for the binary and for testing
pub mod app;
pub mod cli;
pub mod constants;
pub mod content;
pub mod error;
pub mod frontend;
pub mod logging;
pub mod runner;
pub mod types;
pub mod ui;
