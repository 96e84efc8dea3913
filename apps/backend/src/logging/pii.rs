use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Vetted literals; both compile.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

fn token_regex() -> &'static Regex {
    // base64-like or hex runs of 16+ chars (JWT segments, bcrypt output, ids)
    static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/$.]{16,}={0,2}\b").unwrap()
    });
    &TOKEN_REGEX
}

/// Redacts sensitive information from a string.
///
/// Emails keep the first character of the local part and the full domain;
/// opaque token-like runs are replaced wholesale. Emails are processed first
/// so their domains are not half-eaten by the token pass.
pub fn redact(input: &str) -> String {
    let email_redacted = email_regex().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) if at_pos > 0 => {
                let first_char = &full_match[..1];
                let domain = &full_match[at_pos..];
                format!("{first_char}***{domain}")
            }
            _ => full_match.to_string(),
        }
    });

    token_regex()
        .replace_all(&email_redacted, "[REDACTED]")
        .to_string()
}

/// A wrapper that redacts sensitive strings when displayed, so call sites can
/// log `%Redacted(&email)` without thinking about it.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_emails_keeping_domain() {
        assert_eq!(redact("maria@escola.edu.br"), "m***@escola.edu.br");
        assert_eq!(
            redact("Contato: joao@example.com ou ana@test.org"),
            "Contato: j***@example.com ou a***@test.org"
        );
    }

    #[test]
    fn redacts_token_like_runs() {
        assert_eq!(
            redact("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "[REDACTED]"
        );
        // Short strings stay untouched
        assert_eq!(redact("abc123"), "abc123");
    }

    #[test]
    fn display_wrapper_redacts() {
        assert_eq!(
            format!("{}", Redacted("user@example.com")),
            "u***@example.com"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(redact("login rejeitado"), "login rejeitado");
        assert_eq!(redact(""), "");
    }
}
