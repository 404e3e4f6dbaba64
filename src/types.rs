//! Core types for validated email addresses

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural parts of a valid email address
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailComponents {
    /// Local part (before @), including any plus tags
    pub local: String,

    /// Domain part (after @)
    pub domain: String,

    /// Plus-addressing tags in order of appearance
    pub plus_tags: Vec<String>,
}

impl EmailComponents {
    /// Reassemble the address as `local@domain`
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.local, self.domain)
    }

    /// Local part without plus tags (e.g., "user" for "user+news")
    #[must_use]
    pub fn base_local(&self) -> &str {
        self.local
            .split_once('+')
            .map_or(self.local.as_str(), |(base, _)| base)
    }

    #[must_use]
    pub const fn has_plus_tags(&self) -> bool {
        !self.plus_tags.is_empty()
    }
}

impl fmt::Display for EmailComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Outcome of validating one email address
///
/// Either valid with populated components and no error, or invalid with an
/// error and default components. The constructors are the only way to build
/// one, so no other combination exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    error: Option<ValidationError>,
    components: EmailComponents,
}

impl ValidationResult {
    #[must_use]
    pub const fn valid(components: EmailComponents) -> Self {
        Self {
            is_valid: true,
            error: None,
            components,
        }
    }

    #[must_use]
    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
            components: EmailComponents::default(),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Error message, if the address was rejected
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Extracted components (default when invalid)
    #[must_use]
    pub const fn components(&self) -> &EmailComponents {
        &self.components
    }

    /// Convert back into a `Result`
    pub fn into_result(self) -> Result<EmailComponents> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.components),
        }
    }
}

impl From<Result<EmailComponents>> for ValidationResult {
    fn from(result: Result<EmailComponents>) -> Self {
        match result {
            Ok(components) => Self::valid(components),
            Err(err) => Self::invalid(err),
        }
    }
}

/// Limits applied during validation
///
/// The defaults are the canonical rule set. Deserializing a partial table
/// fills the missing fields from the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Maximum characters in the local part
    pub max_local_length: usize,

    /// Maximum characters in the whole domain
    pub max_domain_length: usize,

    /// Maximum characters in a single domain label
    pub max_label_length: usize,

    /// Maximum number of domain labels, base domain and TLD included
    pub max_labels: usize,
}

impl Limits {
    pub const STANDARD: Self = Self {
        max_local_length: 64,
        max_domain_length: 255,
        max_label_length: 32,
        max_labels: 12,
    };

    /// Labels that are not the base domain or the TLD
    #[must_use]
    pub const fn max_subdomain_levels(&self) -> usize {
        self.max_labels.saturating_sub(2)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::STANDARD
    }
}
