//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs.

mod report;

pub use report::run_report;
