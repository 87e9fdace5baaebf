//! Cursor over the tokens of one bulk parse.
//!
//! [`Target::Adjacent`](crate::Target::Adjacent) handlers receive the cursor
//! positioned after the option token and may consume as many following
//! tokens as they need. Consumed tokens are not dispatched as options.

use std::str::FromStr;

use crate::error::{ParserError, Result};

/// Token list with a read position.
#[derive(Debug, Default)]
pub struct Tokens<'t> {
    items: &'t [String],
    pos: usize,
    option: Option<String>,
}

impl<'t> Tokens<'t> {
    pub(crate) fn new(items: &'t [String]) -> Self {
        Self {
            items,
            pos: 0,
            option: None,
        }
    }

    /// Returns the next token and marks it as the one being dispatched.
    pub(crate) fn advance(&mut self) -> Option<&'t str> {
        let token = self.items.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    pub(crate) fn set_option(&mut self, option: Option<String>) {
        self.option = option;
    }

    /// Spelling of the option whose handler is running.
    pub fn last_match(&self) -> Option<&str> {
        self.option.as_deref()
    }

    /// Returns `true` if unread tokens remain.
    pub fn has_more(&self) -> bool {
        self.pos < self.items.len()
    }

    /// Number of unread tokens.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }

    /// Consumes the next token verbatim.
    ///
    /// # Errors
    ///
    /// [`MissingValue`](ParserError::MissingValue) when no token is left.
    pub fn next_str(&mut self) -> Result<&'t str> {
        self.advance().ok_or_else(|| ParserError::MissingValue {
            option: self.option_name(),
        })
    }

    /// Consumes the next token and parses it as `T`.
    ///
    /// # Errors
    ///
    /// [`MissingValue`](ParserError::MissingValue) when no token is left,
    /// [`InvalidValue`](ParserError::InvalidValue) when it does not parse.
    /// The token is consumed in both the success and the parse-failure case.
    pub fn next_value<T: FromStr>(&mut self) -> Result<T> {
        let raw = self.next_str()?;
        raw.trim().parse().map_err(|_| ParserError::InvalidValue {
            option: self.option_name(),
            value: raw.to_string(),
        })
    }

    /// Consumes the next token as an integer.
    pub fn next_int(&mut self) -> Result<i64> {
        self.next_value()
    }

    /// Consumes the next token as a floating point number.
    pub fn next_double(&mut self) -> Result<f64> {
        self.next_value()
    }

    fn option_name(&self) -> String {
        self.option.clone().unwrap_or_default()
    }
}
