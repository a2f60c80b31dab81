pub mod commands;
pub mod config;
pub mod payload;
pub mod performance;
pub mod report;
pub mod runner;
pub mod ui;
pub mod utils;
