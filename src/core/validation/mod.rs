//! Request validation
//!
//! Request types derive `validator::Validate` and use the rules in
//! [`rules`]; handlers receive them through the [`Validated`] extractor.

pub mod extractor;
pub mod rules;

pub use extractor::Validated;
