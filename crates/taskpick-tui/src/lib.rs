/*
[INPUT]:  Public API exports for taskpick-tui crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod controller;

// Re-export main types for convenience
pub use config::AppConfig;
pub use controller::{Controller, ControllerError, Selection};
