//! Repository functions for the domain layer.

pub mod authors;
