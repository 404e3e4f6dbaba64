//! Email address validation

use crate::error::{Result, ValidationError};
use crate::types::{EmailComponents, Limits, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

// Regex patterns
static LOCAL_PART_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._+-]+$").unwrap());

static DOMAIN_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

static QUOTED_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"".*""#).unwrap());

static DEFAULT_VALIDATOR: EmailValidator = EmailValidator::new();

/// Validate an email address against the default limits
///
/// ```rust
/// use email_validator::validate_email;
///
/// let result = validate_email("user+news@example.com");
/// assert!(result.is_valid());
/// assert_eq!(result.components().plus_tags, vec!["news".to_string()]);
/// ```
#[must_use]
pub fn validate_email(email: &str) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(email)
}

fn has_whitespace(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_whitespace())
}

/// Stateless validator; holds only its limits and can be shared across threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator {
    limits: Limits,
}

impl EmailValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limits(Limits::STANDARD)
    }

    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Validate an address, folding any rejection into the result
    #[must_use]
    pub fn validate(&self, email: &str) -> ValidationResult {
        self.parse(email).into()
    }

    /// Validate an address and return its components
    ///
    /// Surrounding whitespace is trimmed first. Checks run in a fixed order and
    /// the first failure is returned.
    pub fn parse(&self, email: &str) -> Result<EmailComponents> {
        let result = self.check(email);

        match &result {
            Ok(components) => trace!(
                domain = %components.domain,
                plus_tags = components.plus_tags.len(),
                "Accepted email address"
            ),
            Err(err) => debug!("Rejected email address: {err}"),
        }

        result
    }

    fn check(&self, email: &str) -> Result<EmailComponents> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Empty);
        }

        if !email.is_ascii() {
            return Err(ValidationError::NonAscii);
        }

        if QUOTED_STRING_REGEX.is_match(email) {
            return Err(ValidationError::QuotedLocalPart);
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(ValidationError::MissingAt);
        };
        if domain.contains('@') {
            return Err(ValidationError::MultipleAt);
        }

        self.check_local_part(local)?;
        self.check_domain(domain)?;

        Ok(EmailComponents {
            local: local.to_string(),
            domain: domain.to_string(),
            plus_tags: extract_plus_tags(local),
        })
    }

    // Input is ASCII by now, so byte length equals character count
    fn check_local_part(&self, local: &str) -> Result<()> {
        if local.is_empty() {
            return Err(ValidationError::EmptyLocalPart);
        }

        if local.len() > self.limits.max_local_length {
            return Err(ValidationError::LocalPartTooLong {
                max: self.limits.max_local_length,
            });
        }

        if has_whitespace(local) {
            return Err(ValidationError::LocalPartWhitespace);
        }

        if !LOCAL_PART_REGEX.is_match(local) {
            return Err(ValidationError::LocalPartInvalidCharacters);
        }

        if local.contains("..") {
            return Err(ValidationError::LocalPartConsecutiveDots);
        }

        if local.starts_with('.') {
            return Err(ValidationError::LocalPartLeadingDot);
        }

        if local.ends_with('.') {
            return Err(ValidationError::LocalPartTrailingDot);
        }

        if local.starts_with('+') {
            return Err(ValidationError::LocalPartLeadingPlus);
        }

        Ok(())
    }

    fn check_domain(&self, domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(ValidationError::EmptyDomain);
        }

        if has_whitespace(domain) {
            return Err(ValidationError::DomainWhitespace);
        }

        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(ValidationError::DomainEdgeDot);
        }

        if domain.starts_with('-') || domain.ends_with('-') {
            return Err(ValidationError::DomainEdgeHyphen);
        }

        if domain.contains("..") {
            return Err(ValidationError::DomainConsecutiveDots);
        }

        // Total length is checked before any label is looked at
        if domain.len() > self.limits.max_domain_length {
            return Err(ValidationError::DomainTooLong {
                max: self.limits.max_domain_length,
            });
        }

        let labels: Vec<&str> = domain.split('.').collect();

        if labels.len() < 2 {
            return Err(ValidationError::DomainMissingTld);
        }

        if labels.len() > self.limits.max_labels {
            return Err(ValidationError::DomainTooDeep {
                max_subdomains: self.limits.max_subdomain_levels(),
            });
        }

        for (i, label) in labels.iter().enumerate() {
            self.check_label(label, i + 1)?;
        }

        Ok(())
    }

    // Charset and hyphen placement come before length, so an overlong label
    // with bad characters reports the characters.
    fn check_label(&self, label: &str, position: usize) -> Result<()> {
        if label.is_empty() {
            return Err(ValidationError::EmptyLabel { position });
        }

        if !DOMAIN_LABEL_REGEX.is_match(label) {
            return Err(ValidationError::LabelInvalidCharacters {
                label: label.to_string(),
            });
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::LabelEdgeHyphen {
                label: label.to_string(),
            });
        }

        if label.len() > self.limits.max_label_length {
            return Err(ValidationError::LabelTooLong {
                label: label.to_string(),
                max: self.limits.max_label_length,
            });
        }

        Ok(())
    }
}

/// Tags after the base local part, e.g. "user+a+b" -> ["a", "b"]
fn extract_plus_tags(local: &str) -> Vec<String> {
    local.split('+').skip(1).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_detection() {
        assert!(has_whitespace("a b"));
        assert!(has_whitespace("a\tb"));
        assert!(has_whitespace("a\nb"));
        assert!(!has_whitespace("ab"));
    }

    #[test]
    fn plus_tags_skip_base() {
        assert!(extract_plus_tags("user").is_empty());
        assert_eq!(extract_plus_tags("user+a+b"), vec!["a", "b"]);
        assert_eq!(extract_plus_tags("user+"), vec![""]);
    }

    #[test]
    fn new_matches_default_limits() {
        assert_eq!(EmailValidator::new(), EmailValidator::default());
    }
}
