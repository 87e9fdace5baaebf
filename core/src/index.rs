//! Character-to-bucket mapping for trie edges.
//!
//! Every edge of the option trie is addressed by a small dense integer
//! produced by a [`CharIndex`]. The mapping fixes both the branching factor
//! of each node and the case-insensitivity of matching.
//!
//! # Examples
//!
//! ```
//! use optrie_core::{AsciiFold, CharIndex, FOLD_BUCKETS};
//!
//! let fold = AsciiFold;
//! assert_eq!(fold.index('V'), fold.index('v'));
//! assert_eq!(fold.index('-'), 13);
//! assert_eq!(fold.bucket_count(), FOLD_BUCKETS);
//! ```

/// Maps characters onto trie buckets.
///
/// Implementations must be total and deterministic. Bucket `0` is the
/// conventional catch-all for characters the mapping does not distinguish.
pub trait CharIndex {
    /// Returns the bucket for `ch`.
    fn index(&self, ch: char) -> usize;

    /// Number of buckets, i.e. `max(index) + 1` over the byte domain
    /// `U+0000..=U+00FF`.
    fn bucket_count(&self) -> usize {
        (0u8..=u8::MAX)
            .map(|byte| self.index(char::from(byte)))
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// Case-insensitive mapping of printable ASCII `[32, 126]` onto `[0, 68]`.
///
/// ASCII letters fold to lowercase. Everything outside the printable range
/// lands in bucket `0`, which it shares with the space character. An option
/// spelling containing a space therefore also matches any non-printable or
/// non-ASCII character at that position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiFold;

impl CharIndex for AsciiFold {
    fn index(&self, ch: char) -> usize {
        fold_index(ch)
    }

    fn bucket_count(&self) -> usize {
        FOLD_BUCKETS
    }
}

/// Const form of [`AsciiFold::index`].
pub const fn fold_index(ch: char) -> usize {
    let mut code = ch as u32;
    if code < 32 || code > 126 {
        return 0;
    }
    if code >= 'A' as u32 {
        if code <= 'Z' as u32 {
            code |= 0x20;
        }
        code -= 26;
    }
    (code - 32) as usize
}

/// Bucket count of [`AsciiFold`], computed at compile time.
pub const FOLD_BUCKETS: usize = fold_bucket_count();

const fn fold_bucket_count() -> usize {
    let mut max = 0;
    let mut code = 0u8;
    loop {
        let index = fold_index(code as char);
        if index > max {
            max = index;
        }
        if code == u8::MAX {
            break;
        }
        code += 1;
    }
    max + 1
}
