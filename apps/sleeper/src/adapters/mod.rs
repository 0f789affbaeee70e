//! Adapters for external dependencies.

pub mod sleepers_sea;
