#![allow(dead_code)]

pub mod app_builder;
pub mod factory;
pub mod logging;
pub mod state_builder_ext;

pub use app_builder::create_test_app;
