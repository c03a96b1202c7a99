// Logbook - app/mod.rs
//
// Application layer. Orchestrates core logic against real files and
// interactive streams for the two binaries.

pub mod loader;
pub mod report;
pub mod session;
