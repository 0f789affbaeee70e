//! Sleeper test support utilities
//!
//! Shared helpers for unit and integration tests of the sleeper service.

pub mod logging;
