//! Utility module - errors, logging, validation

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult};
pub use validation::{Validate, ValidationReport};
