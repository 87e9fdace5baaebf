//! Option registration and token dispatch.
//!
//! A [`Parser`] owns the option trie and every bound [`Target`]. Options are
//! registered through a [`Registration`] handle that collects an alias group
//! and assigns one shared target to all of its spellings on
//! [`finish`](Registration::finish).
//!
//! # Examples
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use optrie_core::{Parser, ParserError, Target};
//!
//! let verbose = Cell::new(false);
//! let output = RefCell::new(String::new());
//!
//! let mut parser = Parser::new();
//! parser
//!     .add("-verbose")?
//!     .alias("-v")?
//!     .bind(Target::flag(&verbose, true))?
//!     .finish();
//! parser
//!     .add("-o")?
//!     .bind(Target::remainder(|rest| *output.borrow_mut() = rest.to_string()))?
//!     .finish();
//!
//! let report = parser.parse(["prog", "-V", "-o=out.txt", "-verb"]);
//! assert_eq!(report.matched.len(), 2);
//! assert_eq!(
//!     report.diagnostics[0].error,
//!     ParserError::InvalidOption { token: "-verb".into(), hint: Some("-v".into()) }
//! );
//! assert!(verbose.get());
//! assert_eq!(*output.borrow(), "=out.txt");
//! # Ok::<(), ParserError>(())
//! ```

use std::mem;

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ParserError, Result};
use crate::index::{AsciiFold, CharIndex};
use crate::report::{Diagnostic, MatchRecord, ParseReport};
use crate::target::Target;
use crate::tokens::Tokens;
use crate::trie::{NodeId, TargetId, Trie};

/// Trie-backed option parser.
///
/// `'a` bounds what bound targets may borrow, so handlers can write into
/// caller-owned state instead of globals.
#[derive(Debug)]
pub struct Parser<'a, I = AsciiFold> {
    trie: Trie<I>,
    targets: Vec<Target<'a>>,
    config: ParserConfig,
    options: usize,
    last_hint: Option<NodeId>,
}

impl<'a> Parser<'a, AsciiFold> {
    /// Creates a case-insensitive parser with default settings.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a case-insensitive parser with `config`.
    pub fn with_config(config: ParserConfig) -> Self {
        Self::with_index(AsciiFold, config)
    }
}

impl Default for Parser<'_, AsciiFold> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: CharIndex> Parser<'a, I> {
    /// Creates a parser over a custom character index.
    pub fn with_index(index: I, config: ParserConfig) -> Self {
        Self {
            trie: Trie::new(index),
            targets: Vec::new(),
            config,
            options: 0,
            last_hint: None,
        }
    }

    /// Active settings.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Registers `spelling` and returns a handle for aliasing and binding.
    ///
    /// # Errors
    ///
    /// [`EmptyOption`](ParserError::EmptyOption) or
    /// [`MultipleDefinition`](ParserError::MultipleDefinition).
    pub fn add(&mut self, spelling: &str) -> Result<Registration<'_, 'a, I>> {
        let node = self.insert(spelling)?;
        Ok(Registration {
            parser: self,
            spelling: spelling.to_string(),
            nodes: vec![node],
            slot: Slot::Empty,
        })
    }

    /// Returns `true` if `spelling` (or a variant the index folds onto it)
    /// is registered.
    pub fn is_registered(&self, spelling: &str) -> bool {
        let walk = self.trie.walk(spelling);
        walk.consumed == spelling.len() && self.trie.terminal(walk.node).is_some()
    }

    /// Number of registered spellings, aliases included.
    pub fn option_count(&self) -> usize {
        self.options
    }

    /// Number of distinct bound targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Deepest registered spelling seen by the most recent dispatch.
    ///
    /// After a successful dispatch this is the matched spelling; after a
    /// failed one it is the suggestion, if any.
    pub fn last_match(&self) -> Option<&str> {
        self.last_hint.and_then(|id| self.trie.terminal(id))
    }

    /// Dispatches a single token.
    ///
    /// Adjacent-token handlers see no following tokens here; use
    /// [`parse`](Self::parse) for those.
    ///
    /// # Errors
    ///
    /// [`InvalidOption`](ParserError::InvalidOption) when the token does not
    /// resolve to a correctly shaped match,
    /// [`MissingValue`](ParserError::MissingValue) /
    /// [`InvalidValue`](ParserError::InvalidValue) when a value-taking
    /// option lacks a usable value.
    pub fn parse_one(&mut self, token: &str) -> Result<()> {
        let mut tokens = Tokens::default();
        self.dispatch(token, &mut tokens).map(|_| ())
    }

    /// Dispatches every token of `args` in order.
    ///
    /// The first item is skipped when [`ParserConfig::skip_first`] is set.
    /// Failing tokens are logged and recorded; parsing always continues with
    /// the next unread token.
    pub fn parse<T, S>(&mut self, args: T) -> ParseReport
    where
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<String> = args
            .into_iter()
            .skip(usize::from(self.config.skip_first))
            .map(|arg| arg.as_ref().to_string())
            .collect();

        let mut tokens = Tokens::new(&items);
        let mut report = ParseReport::default();
        while let Some(token) = tokens.advance() {
            match self.dispatch(token, &mut tokens) {
                Ok(option) => report.matched.push(MatchRecord {
                    token: token.to_string(),
                    option,
                }),
                Err(err) => {
                    warn!(token, error = %err, "skipping token");
                    report.diagnostics.push(Diagnostic::new(token, err));
                }
            }
        }
        report
    }

    fn insert(&mut self, spelling: &str) -> Result<NodeId> {
        let node = self.trie.insert(spelling)?;
        self.options += 1;
        Ok(node)
    }

    fn dispatch(&mut self, token: &str, tokens: &mut Tokens<'_>) -> Result<String> {
        let walk = self.trie.walk(token);
        self.last_hint = walk.hint;
        let rest = walk.remainder(token);

        let (option, id) = match (self.trie.terminal(walk.node), self.trie.target(walk.node)) {
            (Some(option), Some(id)) => (option.to_string(), id),
            _ => return Err(invalid_option(&self.trie, token, walk.hint, self.config.suggest)),
        };

        let target = &mut self.targets[id.0];
        debug!(token, option = %option, kind = target.kind(), "dispatching option");
        match target {
            Target::Action(f) if rest.is_empty() => f(),
            Target::Remainder(f) if !rest.is_empty() => f(rest),
            Target::Remainder(_) => return Err(ParserError::MissingValue { option }),
            Target::Adjacent(f) if rest.is_empty() => {
                tokens.set_option(Some(option.clone()));
                let result = f(tokens);
                tokens.set_option(None);
                result?;
            }
            Target::Action(_) | Target::Adjacent(_) => {
                return Err(invalid_option(&self.trie, token, walk.hint, self.config.suggest));
            }
        }
        Ok(option)
    }

    fn register_target(&mut self, target: Target<'a>) -> TargetId {
        let id = TargetId(self.targets.len());
        self.targets.push(target);
        id
    }
}

fn invalid_option<I: CharIndex>(
    trie: &Trie<I>,
    token: &str,
    hint: Option<NodeId>,
    suggest: bool,
) -> ParserError {
    let hint = hint
        .filter(|_| suggest)
        .and_then(|id| trie.terminal(id))
        .map(String::from);
    ParserError::InvalidOption {
        token: token.to_string(),
        hint,
    }
}

#[derive(Debug)]
enum Slot<'a> {
    Empty,
    Pending(Target<'a>),
    Bound(TargetId),
}

/// Alias group under construction.
///
/// Returned by [`Parser::add`]. Chain [`alias`](Self::alias) and
/// [`bind`](Self::bind), then call [`finish`](Self::finish) to assign the
/// target to every spelling of the group.
#[derive(Debug)]
#[must_use = "call `finish` to attach the bound target"]
pub struct Registration<'p, 'a, I: CharIndex = AsciiFold> {
    parser: &'p mut Parser<'a, I>,
    spelling: String,
    nodes: Vec<NodeId>,
    slot: Slot<'a>,
}

impl<'a, I: CharIndex> Registration<'_, 'a, I> {
    /// Adds another spelling to the group.
    ///
    /// After [`finish`](Self::finish) the new spelling joins the already
    /// bound target directly.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::add`].
    pub fn alias(&mut self, spelling: &str) -> Result<&mut Self> {
        let node = self.parser.insert(spelling)?;
        if let Slot::Bound(id) = self.slot {
            self.parser.trie.set_target(node, id);
        }
        self.nodes.push(node);
        Ok(self)
    }

    /// Sets the group's target.
    ///
    /// # Errors
    ///
    /// [`MultipleBind`](ParserError::MultipleBind) if a target was already
    /// bound; the first target is kept.
    pub fn bind(&mut self, target: Target<'a>) -> Result<&mut Self> {
        if !matches!(self.slot, Slot::Empty) {
            return Err(ParserError::MultipleBind(self.spelling.clone()));
        }
        debug!(option = %self.spelling, kind = target.kind(), "bound target");
        self.slot = Slot::Pending(target);
        Ok(self)
    }

    /// Hands the target to the parser and points every spelling of the
    /// group at it. Calling it again is a no-op.
    pub fn finish(&mut self) {
        match mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Pending(target) => {
                let id = self.parser.register_target(target);
                for &node in &self.nodes {
                    self.parser.trie.set_target(node, id);
                }
                self.slot = Slot::Bound(id);
            }
            Slot::Bound(id) => self.slot = Slot::Bound(id),
            Slot::Empty => warn!(option = %self.spelling, "finished without a target"),
        }
    }

    /// Spellings in the group, in registration order.
    pub fn spellings(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|&node| self.parser.trie.terminal(node))
            .collect()
    }
}

impl<I: CharIndex> Drop for Registration<'_, '_, I> {
    fn drop(&mut self) {
        if matches!(self.slot, Slot::Pending(_)) {
            warn!(option = %self.spelling, "registration dropped before finish; target discarded");
        }
    }
}
