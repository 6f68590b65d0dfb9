//! # sigma-core
//!
//! Core types and error types shared by every SIGMA crate.
//!
//! This crate provides:
//! - The fixed cohort size and the validated [`SubjectId`] newtype
//! - Measurement [`Period`] and [`DatasetFamily`] enums
//! - Cross-cutting [`CoreError`] for contract violations

pub mod enums;
pub mod errors;
pub mod ids;

pub use enums::{DatasetFamily, Period};
pub use errors::CoreError;
pub use ids::{COHORT_SIZE, SubjectId};
