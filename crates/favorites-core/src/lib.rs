//! # favorites-core
//!
//! Core crate for the LUDOS favorites engine. Contains configuration
//! schemas, typed identifiers, the exam scope enum, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other favorites crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
