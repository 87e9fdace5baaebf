//! Parser behavior settings.

use serde::{Deserialize, Serialize};

/// Settings for a [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```
/// use optrie_core::ParserConfig;
///
/// let config = ParserConfig::default().skip_first(false).suggest(false);
/// assert!(!config.skip_first);
/// assert!(!config.suggest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Skip the first token of a bulk parse (the program name in `argv`).
    pub skip_first: bool,
    /// Attach "did you mean" hints to invalid-option errors.
    pub suggest: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_first: true,
            suggest: true,
        }
    }
}

impl ParserConfig {
    /// Sets [`skip_first`](Self::skip_first).
    pub fn skip_first(mut self, skip: bool) -> Self {
        self.skip_first = skip;
        self
    }

    /// Sets [`suggest`](Self::suggest).
    pub fn suggest(mut self, suggest: bool) -> Self {
        self.suggest = suggest;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"suggest": false}"#).unwrap();
        assert!(config.skip_first);
        assert!(!config.suggest);
    }
}
