//! Error types for option registration and token dispatch.
//!
//! Registration errors ([`EmptyOption`](ParserError::EmptyOption),
//! [`MultipleDefinition`](ParserError::MultipleDefinition),
//! [`UnindexedCharacter`](ParserError::UnindexedCharacter),
//! [`MultipleBind`](ParserError::MultipleBind)) indicate a programming error
//! in the option table and are expected to abort startup. The remaining
//! variants describe a single bad token and are recoverable: the bulk parser
//! reports them and moves on to the next token.

use thiserror::Error;

/// Errors raised while registering options or dispatching tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// An empty spelling was registered; it would bind the trie root.
    #[error("option spelling cannot be empty")]
    EmptyOption,

    /// The spelling (or a case variant of it) is already registered.
    #[error("multiple definition: \"{0}\"")]
    MultipleDefinition(String),

    /// The spelling contains a character the index maps past its bucket count.
    #[error("unindexed character {ch:?} in option \"{option}\"")]
    UnindexedCharacter {
        /// The rejected spelling.
        option: String,
        /// First offending character.
        ch: char,
    },

    /// A registration handle received a second target.
    #[error("multiple bind: \"{0}\"")]
    MultipleBind(String),

    /// The token does not resolve to a correctly shaped match.
    #[error("invalid option: \"{token}\"{}", did_you_mean(.hint))]
    InvalidOption {
        /// The offending token, verbatim.
        token: String,
        /// Deepest registered spelling on the walked path.
        hint: Option<String>,
    },

    /// A value-taking option matched but no value was available.
    #[error("no more argument for \"{option}\"")]
    MissingValue {
        /// The matched option spelling.
        option: String,
    },

    /// A value-taking option received a value it could not convert.
    #[error("\"{option}\" got a wrong value: \"{value}\"")]
    InvalidValue {
        /// The matched option spelling.
        option: String,
        /// The raw value token.
        value: String,
    },
}

impl ParserError {
    /// Returns `true` for errors raised while building the option table.
    ///
    /// # Examples
    ///
    /// ```
    /// use optrie_core::ParserError;
    ///
    /// assert!(ParserError::MultipleDefinition("-v".into()).is_registration());
    /// assert!(!ParserError::MissingValue { option: "-o".into() }.is_registration());
    /// ```
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            Self::EmptyOption
                | Self::MultipleDefinition(_)
                | Self::UnindexedCharacter { .. }
                | Self::MultipleBind(_)
        )
    }

    /// Suggested spelling carried by an [`InvalidOption`](Self::InvalidOption).
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidOption { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

fn did_you_mean(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(", did you mean \"{hint}\" ?"),
        None => String::new(),
    }
}

/// Convenience alias for results with [`ParserError`].
pub type Result<T> = std::result::Result<T, ParserError>;
