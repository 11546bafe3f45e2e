//! Utility functions used by the shortener service.
//!
//! - [`code_generator`] - Random short code generation
//! - [`extract_domain`] - Source domain extraction from target URLs

pub mod code_generator;
pub mod extract_domain;
