//! # Utility Functions
//!
//! - **[`validation`]**: Input validation (friend ids, message text, display names, image types)
//!
//! See also [`shared::utils`] for timestamp and preview formatting.

pub mod validation;
