//! Actions and handlers bound to registered options.

use std::cell::Cell;
use std::fmt;

use crate::error::Result;
use crate::tokens::Tokens;

/// Callback bound to an alias group.
///
/// The variant decides which token shapes match:
///
/// - [`Action`](Target::Action) and [`Adjacent`](Target::Adjacent) match
///   only when the token is exactly a registered spelling.
/// - [`Remainder`](Target::Remainder) matches only when a non-empty suffix
///   follows the spelling, and receives that suffix verbatim.
pub enum Target<'a> {
    /// Zero-argument action.
    Action(Box<dyn FnMut() + 'a>),
    /// Handler for the suffix embedded in the same token (`-ofile`, `-o=file`).
    Remainder(Box<dyn FnMut(&str) + 'a>),
    /// Handler that reads its value(s) from the tokens that follow.
    Adjacent(Box<dyn FnMut(&mut Tokens<'_>) -> Result<()> + 'a>),
}

impl<'a> Target<'a> {
    /// Wraps a zero-argument action.
    pub fn action(f: impl FnMut() + 'a) -> Self {
        Self::Action(Box::new(f))
    }

    /// Wraps an embedded-suffix handler.
    pub fn remainder(f: impl FnMut(&str) + 'a) -> Self {
        Self::Remainder(Box::new(f))
    }

    /// Wraps an adjacent-token handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use optrie_core::{Parser, Target};
    ///
    /// let jobs = Cell::new(1);
    /// let mut parser = Parser::new();
    /// parser
    ///     .add("-j")?
    ///     .bind(Target::adjacent(|tokens| {
    ///         jobs.set(tokens.next_int()?);
    ///         Ok(())
    ///     }))?
    ///     .finish();
    ///
    /// let report = parser.parse(["prog", "-j", "8"]);
    /// assert!(report.is_clean());
    /// drop(parser);
    /// assert_eq!(jobs.get(), 8);
    /// # Ok::<(), optrie_core::ParserError>(())
    /// ```
    pub fn adjacent(f: impl FnMut(&mut Tokens<'_>) -> Result<()> + 'a) -> Self {
        Self::Adjacent(Box::new(f))
    }

    /// Action that stores `value` into `flag`.
    pub fn flag(flag: &'a Cell<bool>, value: bool) -> Self {
        Self::action(move || flag.set(value))
    }

    /// Short name of the variant, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Action(_) => "action",
            Self::Remainder(_) => "remainder",
            Self::Adjacent(_) => "adjacent",
        }
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Target").field(&self.kind()).finish()
    }
}
