//! Outcome of a bulk parse.

use serde::Serialize;

use crate::error::ParserError;

/// A token that dispatched successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// The token as given.
    pub token: String,
    /// Registered spelling it resolved to.
    pub option: String,
}

/// A token that failed to dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The token as given.
    pub token: String,
    /// Human-readable error message.
    pub message: String,
    /// Suggested spelling, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Underlying error.
    #[serde(skip)]
    pub error: ParserError,
}

impl Diagnostic {
    pub(crate) fn new(token: &str, error: ParserError) -> Self {
        Self {
            token: token.to_string(),
            message: error.to_string(),
            hint: error.hint().map(String::from),
            error,
        }
    }
}

/// Matches and diagnostics collected by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Successful dispatches, in token order.
    pub matched: Vec<MatchRecord>,
    /// Failed tokens, in token order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns `true` if no token failed.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of failed tokens.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Errors in token order.
    pub fn errors(&self) -> impl Iterator<Item = &ParserError> {
        self.diagnostics.iter().map(|d| &d.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_serializes_message_and_hint() {
        let diagnostic = Diagnostic::new(
            "-tst",
            ParserError::InvalidOption {
                token: "-tst".to_string(),
                hint: Some("-t".to_string()),
            },
        );
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "token": "-tst",
                "message": "invalid option: \"-tst\", did you mean \"-t\" ?",
                "hint": "-t",
            })
        );
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = ParseReport::default();
        assert!(report.is_clean());
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.errors().count(), 0);
    }
}
