// Logbook - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, regex, serde/csv for export.
// Must NOT depend on: app, platform, or touch the filesystem directly.

pub mod command;
pub mod contacts;
pub mod export;
pub mod filter;
pub mod handlers;
pub mod model;
pub mod parser;
pub mod report;
pub mod stats;
