//! Self-test runner for the email validator
//!
//! Runs a fixed set of scenarios, prints one line per case and exits with a
//! non-zero status if any of them fails.

use email_validator::{ValidationResult, validate_email};
use std::process::ExitCode;
use tracing::info;

enum Expect {
    Valid {
        local: &'static str,
        domain: &'static str,
        tags: &'static [&'static str],
    },
    Invalid { keyword: &'static str },
}

struct Case {
    email: String,
    expect: Expect,
}

impl Case {
    fn valid(
        email: &str,
        local: &'static str,
        domain: &'static str,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            email: email.to_string(),
            expect: Expect::Valid { local, domain, tags },
        }
    }

    fn invalid(email: impl Into<String>, keyword: &'static str) -> Self {
        Self {
            email: email.into(),
            expect: Expect::Invalid { keyword },
        }
    }

    fn check(&self, result: &ValidationResult) -> Result<(), String> {
        match &self.expect {
            Expect::Valid { local, domain, tags } => {
                if !result.is_valid() {
                    return Err(format!(
                        "expected valid, got error: {}",
                        result.error_message().unwrap_or_default()
                    ));
                }
                let components = result.components();
                if components.local != *local
                    || components.domain != *domain
                    || components.plus_tags != *tags
                {
                    return Err(format!("unexpected components: {components:?}"));
                }
                Ok(())
            }
            Expect::Invalid { keyword } => match result.error_message() {
                Some(message) if message.to_lowercase().contains(keyword) => Ok(()),
                Some(message) => Err(format!("error '{message}' does not mention '{keyword}'")),
                None => Err("expected invalid, got valid".to_string()),
            },
        }
    }
}

fn label(len: usize) -> String {
    "x".repeat(len)
}

fn cases() -> Vec<Case> {
    vec![
        Case::valid("user@domain.com", "user", "domain.com", &[]),
        Case::valid("user.name@domain.com", "user.name", "domain.com", &[]),
        Case::valid("user+tag@domain.com", "user+tag", "domain.com", &["tag"]),
        Case::valid("user+a+b+c@d.com", "user+a+b+c", "d.com", &["a", "b", "c"]),
        Case::valid("user@a.b.c.domain.com", "user", "a.b.c.domain.com", &[]),
        Case::valid("u@d.io", "u", "d.io", &[]),
        Case::valid("  user@domain.com  ", "user", "domain.com", &[]),
        Case::valid(
            "user+tag@sub-domain.domain.com",
            "user+tag",
            "sub-domain.domain.com",
            &["tag"],
        ),
        Case::invalid("", "empty"),
        Case::invalid("   ", "empty"),
        Case::invalid("userdomain.com", "'@'"),
        Case::invalid("a@b@domain.com", "exactly one"),
        Case::invalid("user@domain..com", "consecutive dots"),
        Case::invalid("+tag@domain.com", "'+'"),
        Case::invalid("user@-invalid.domain.com", "hyphen"),
        Case::invalid("user@invalid-.domain.com", "hyphen"),
        Case::invalid("user@domain", "dot"),
        Case::invalid("\"quoted\"@example.com", "quoted"),
        Case::invalid("user@例え.com", "internationalized"),
        Case::invalid(format!("{}@example.com", "a".repeat(65)), "64"),
        Case::invalid(format!("user@{}.com", label(33)), "32"),
        Case::invalid(format!("user@{}.com", label(252)), "255"),
        Case::invalid("user@a.b.c.d.e.f.g.h.i.j.k.l.com", "10 subdomain levels"),
    ]
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    let cases = cases();
    let mut failed = 0usize;

    for case in &cases {
        let result = validate_email(&case.email);
        match case.check(&result) {
            Ok(()) => println!("PASS  {:?}", case.email),
            Err(reason) => {
                failed += 1;
                println!("FAIL  {:?}: {reason}", case.email);
            }
        }
    }

    info!(total = cases.len(), failed, "Self-test finished");
    println!("{} passed, {failed} failed", cases.len() - failed);

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
