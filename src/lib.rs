// Logbook - lib.rs
//
// Library entry point shared by the `log-report` and `contact-assistant`
// binaries and by the integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
