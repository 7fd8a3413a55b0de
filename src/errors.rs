//! Errors raised while turning a fixture into a verdict.
//!
//! Every variant is recoverable at the runner level: it becomes one failed fixture and the run moves on.
//! The `miette::Diagnostic` codes are stable and appear in the console report next to the message.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("cannot read fixture '{}': {source}", .path.display())]
    #[diagnostic(code(leetrun::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture '{}' has no `{section}` line", .path.display())]
    #[diagnostic(
        code(leetrun::missing_section),
        help("a fixture needs an `Input:` line followed later by an `Output:` line")
    )]
    MissingSection { path: PathBuf, section: &'static str },

    #[error("field `{field}` not found in `{line}`")]
    #[diagnostic(code(leetrun::missing_field))]
    MissingField { field: &'static str, line: String },

    #[error("`{token}` is not an integer")]
    #[diagnostic(
        code(leetrun::malformed_element),
        help("run without --strict to skip malformed array elements")
    )]
    MalformedElement { token: String },

    #[error("invalid parameters for {kind}: {reason}")]
    #[diagnostic(code(leetrun::invalid_parameters))]
    InvalidParameters { kind: String, reason: String },

    #[error("no solver registered for problem kind `{kind}`")]
    #[diagnostic(
        code(leetrun::unknown_problem_kind),
        help("run `leetrun --list` to see the registered problem kinds")
    )]
    UnknownProblemKind { kind: String },
}

impl HarnessError {
    pub fn invalid_parameters(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: &'static str, line: &str) -> Self {
        Self::MissingField {
            field,
            line: line.trim().to_string(),
        }
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_trims_line() {
        let err = HarnessError::missing_field("target", "  nums=[1,2]  ");
        assert_eq!(err.to_string(), "field `target` not found in `nums=[1,2]`");
    }

    #[test]
    fn test_diagnostic_codes_are_namespaced() {
        let err = HarnessError::UnknownProblemKind { kind: "three_sum".into() };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("leetrun::unknown_problem_kind"));
        assert!(err.help().is_some());
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = HarnessError::Io {
            path: PathBuf::from("test_cases/two_sum/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("gone"));
    }
}
