//! Backend test support utilities
//!
//! Shared by the backend's integration tests: unified logging initialization,
//! in-memory log capture, and Problem Details assertions.

pub mod log_capture;
pub mod logging;
pub mod problem_details;
