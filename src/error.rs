//! Error types for email validation

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Reasons an email address is rejected
///
/// Every variant renders a stable message through `Display`, so callers can
/// show it to users or match on it in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is empty or whitespace only
    #[error("Email address cannot be empty")]
    Empty,

    /// Input contains non-ASCII characters
    #[error("Internationalized domain names are not supported")]
    NonAscii,

    /// Input contains a quoted string
    #[error("Quoted strings are not allowed in local part")]
    QuotedLocalPart,

    #[error("Email address must contain '@' symbol")]
    MissingAt,

    #[error("Email address must contain exactly one '@' symbol")]
    MultipleAt,

    #[error("Local part cannot be empty")]
    EmptyLocalPart,

    #[error("Local part exceeds maximum length of {max} characters")]
    LocalPartTooLong { max: usize },

    #[error("Local part cannot contain whitespace")]
    LocalPartWhitespace,

    #[error("Local part contains invalid characters")]
    LocalPartInvalidCharacters,

    #[error("Local part cannot contain consecutive dots")]
    LocalPartConsecutiveDots,

    #[error("Local part cannot start with a dot")]
    LocalPartLeadingDot,

    #[error("Local part cannot end with a dot")]
    LocalPartTrailingDot,

    /// Nothing precedes the first plus tag
    #[error("Local part cannot start with '+'")]
    LocalPartLeadingPlus,

    #[error("Domain part cannot be empty")]
    EmptyDomain,

    #[error("Domain cannot contain whitespace")]
    DomainWhitespace,

    #[error("Domain cannot start or end with a dot")]
    DomainEdgeDot,

    #[error("Domain cannot start or end with a hyphen")]
    DomainEdgeHyphen,

    #[error("Domain cannot contain consecutive dots")]
    DomainConsecutiveDots,

    #[error("Domain exceeds maximum length of {max} characters")]
    DomainTooLong { max: usize },

    /// Domain has a single label (no TLD)
    #[error("Domain must contain at least one dot (e.g., example.com)")]
    DomainMissingTld,

    /// Domain has more labels than the configured maximum
    #[error("Domain cannot have more than {max_subdomains} subdomain levels")]
    DomainTooDeep { max_subdomains: usize },

    /// Label position is 1-based
    #[error("Domain label at position {position} is empty")]
    EmptyLabel { position: usize },

    #[error("Domain label '{label}' contains invalid characters")]
    LabelInvalidCharacters { label: String },

    #[error("Domain label '{label}' cannot start or end with hyphen")]
    LabelEdgeHyphen { label: String },

    #[error("Domain label '{label}' exceeds maximum length of {max} characters")]
    LabelTooLong { label: String, max: usize },
}

impl ValidationError {
    /// Whether the error concerns the part after `@`
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyDomain
                | Self::DomainWhitespace
                | Self::DomainEdgeDot
                | Self::DomainEdgeHyphen
                | Self::DomainConsecutiveDots
                | Self::DomainTooLong { .. }
                | Self::DomainMissingTld
                | Self::DomainTooDeep { .. }
                | Self::EmptyLabel { .. }
                | Self::LabelInvalidCharacters { .. }
                | Self::LabelEdgeHyphen { .. }
                | Self::LabelTooLong { .. }
        )
    }

    /// Whether the error concerns the part before `@`
    #[must_use]
    pub const fn is_local_part_error(&self) -> bool {
        matches!(
            self,
            Self::QuotedLocalPart
                | Self::EmptyLocalPart
                | Self::LocalPartTooLong { .. }
                | Self::LocalPartWhitespace
                | Self::LocalPartInvalidCharacters
                | Self::LocalPartConsecutiveDots
                | Self::LocalPartLeadingDot
                | Self::LocalPartTrailingDot
                | Self::LocalPartLeadingPlus
        )
    }
}

// Serialized as the user-facing message
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result type for email validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;
