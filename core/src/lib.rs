//! Prefix-trie command-line option parser.
//!
//! Options are stored in a character trie so a token resolves by walking it
//! once, character by character:
//!
//! - [`CharIndex`] / [`AsciiFold`] — maps characters to trie buckets;
//!   ASCII letters match case-insensitively.
//! - [`Trie`] — the arena-backed prefix tree. A walk returns the deepest
//!   node reached, the unconsumed remainder, and the deepest registered
//!   spelling passed on the way (the "did you mean" hint).
//! - [`Parser`] — registration ([`Parser::add`], [`Registration::alias`],
//!   [`Registration::bind`], [`Registration::finish`]) and dispatch
//!   ([`Parser::parse_one`], [`Parser::parse`]).
//! - [`Target`] — what a match runs: a bare [`Action`](Target::Action), a
//!   [`Remainder`](Target::Remainder) handler for a value embedded in the
//!   same token, or an [`Adjacent`](Target::Adjacent) handler reading the
//!   following tokens through [`Tokens`].
//!
//! Registration errors are fatal programming errors; token errors are
//! collected into a [`ParseReport`] while parsing continues.
//!
//! # Example
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use optrie_core::*;
//!
//! let is_set = Cell::new(false);
//! let file = RefCell::new(String::new());
//!
//! let mut parser = Parser::new();
//! parser.add("-test")?.alias("-t")?.bind(Target::flag(&is_set, true))?.finish();
//! parser
//!     .add("-f")?
//!     .bind(Target::remainder(|rest| *file.borrow_mut() = rest.to_string()))?
//!     .finish();
//!
//! let report = parser.parse(["prog", "-t", "-fhello", "-x"]);
//! assert!(is_set.get());
//! assert_eq!(*file.borrow(), "hello");
//! assert_eq!(report.diagnostics[0].message, "invalid option: \"-x\"");
//! # Ok::<(), ParserError>(())
//! ```

mod config;
mod error;
mod index;
mod parser;
mod report;
mod target;
mod tokens;
mod trie;

pub use config::ParserConfig;
pub use error::{ParserError, Result};
pub use index::{AsciiFold, CharIndex, FOLD_BUCKETS, fold_index};
pub use parser::{Parser, Registration};
pub use report::{Diagnostic, MatchRecord, ParseReport};
pub use target::Target;
pub use tokens::Tokens;
pub use trie::{NodeId, TargetId, Trie, Walk};
