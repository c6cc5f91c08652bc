//! API exposure modules

pub mod rest;

pub use rest::{API_PREFIX, RestExposure};
