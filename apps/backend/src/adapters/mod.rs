//! Adapters for external dependencies.

pub mod authors_sea;
