//! # CentApp Types
//!
//! Wire vocabulary for the CentApp payment API client.
//! This crate has no IO dependencies - only value types, request
//! builders and the conversion into form parameters.
//!
//! ## Layout
//!
//! - `domain/` - Enumerated wire values and the `Params` mapping
//! - `dto/` - Typed request builders
//! - `ports/` - The `ToParams` conversion trait
//! - `error/` - Parse errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, LinkType, ParamValue, Params, PayoutAccountType};
pub use dto::*;
pub use error::ParseError;
pub use ports::ToParams;
