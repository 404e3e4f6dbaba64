// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Practical Email Validation
//!
//! Validates email address strings against a practical rule set (not full
//! RFC 5322) and extracts their structural components.
//!
//! # Features
//!
//! - Ordered checks with one specific error per failure
//! - Plus addressing, with tags extracted in order
//! - Multi-level subdomains with configurable depth and length limits
//! - Pure and reentrant; safe to call from any number of threads
//!
//! # Example
//!
//! ```rust
//! use email_validator::{EmailValidator, ValidationError, validate_email};
//!
//! let result = validate_email("  jane.doe+billing@mail.example.com ");
//! assert!(result.is_valid());
//! assert_eq!(result.components().local, "jane.doe+billing");
//! assert_eq!(result.components().domain, "mail.example.com");
//! assert_eq!(result.components().plus_tags, vec!["billing".to_string()]);
//!
//! let err = EmailValidator::new().parse("user@domain..com").unwrap_err();
//! assert_eq!(err, ValidationError::DomainConsecutiveDots);
//! ```

mod error;
mod types;
mod validator;

pub use error::{Result, ValidationError};
pub use types::*;
pub use validator::{EmailValidator, validate_email};
