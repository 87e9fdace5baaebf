//! Prefix tree of registered option spellings.
//!
//! Nodes live in an arena owned by the [`Trie`] and refer to each other by
//! [`NodeId`]. Dropping the trie drops every node exactly once. The root is
//! never terminal: it stands for the empty prefix.

use tracing::{debug, trace};

use crate::error::{ParserError, Result};
use crate::index::CharIndex;

/// Stable handle of a trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);
}

/// Handle of a target in the parser's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub(crate) usize);

#[derive(Debug)]
struct Node {
    children: Box<[Option<NodeId>]>,
    /// Full spelling, set only where a registered spelling ends.
    terminal: Option<String>,
    target: Option<TargetId>,
}

impl Node {
    fn new(buckets: usize) -> Self {
        Self {
            children: vec![None; buckets].into_boxed_slice(),
            terminal: None,
            target: None,
        }
    }
}

/// Result of walking an input string down the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walk {
    /// Deepest node reached.
    pub node: NodeId,
    /// Byte length of the consumed prefix; the remainder is `&input[consumed..]`.
    pub consumed: usize,
    /// Deepest terminal node entered on the way, if any.
    pub hint: Option<NodeId>,
}

impl Walk {
    /// Unconsumed suffix of `input`, verbatim.
    pub fn remainder<'s>(&self, input: &'s str) -> &'s str {
        &input[self.consumed..]
    }
}

/// Character trie keyed by a [`CharIndex`].
#[derive(Debug)]
pub struct Trie<I> {
    nodes: Vec<Node>,
    index: I,
    buckets: usize,
}

impl<I: CharIndex> Trie<I> {
    /// Creates a trie holding only the root.
    pub fn new(index: I) -> Self {
        let buckets = index.bucket_count();
        Self {
            nodes: vec![Node::new(buckets)],
            index,
            buckets,
        }
    }

    /// Descends from the root as far as `input` follows existing edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use optrie_core::{AsciiFold, NodeId, Trie};
    ///
    /// let mut trie = Trie::new(AsciiFold);
    /// let test = trie.insert("-test").unwrap();
    ///
    /// let walk = trie.walk("-TESTing");
    /// assert_eq!(walk.node, test);
    /// assert_eq!(walk.remainder("-TESTing"), "ing");
    /// assert_eq!(walk.hint.and_then(|id| trie.terminal(id)), Some("-test"));
    ///
    /// assert_eq!(trie.walk("x").node, NodeId::ROOT);
    /// ```
    pub fn walk(&self, input: &str) -> Walk {
        let mut node = NodeId::ROOT;
        let mut hint = None;
        let mut consumed = input.len();

        for (offset, ch) in input.char_indices() {
            let Some(next) = self.child(node, ch) else {
                consumed = offset;
                break;
            };
            node = next;
            if self.nodes[next.0].terminal.is_some() {
                hint = Some(next);
            }
        }

        trace!(input, consumed, "walked option trie");
        Walk {
            node,
            consumed,
            hint,
        }
    }

    /// Inserts `spelling` and marks its last node terminal.
    ///
    /// Fails without touching the trie when the spelling is empty, when it
    /// contains a character whose bucket is outside `bucket_count`, or when
    /// its node already carries a terminal (including case variants under a
    /// folding index).
    pub fn insert(&mut self, spelling: &str) -> Result<NodeId> {
        if spelling.is_empty() {
            return Err(ParserError::EmptyOption);
        }

        let walk = self.walk(spelling);
        let rest = walk.remainder(spelling);
        if rest.is_empty() && self.nodes[walk.node.0].terminal.is_some() {
            return Err(ParserError::MultipleDefinition(spelling.to_string()));
        }

        if let Some(ch) = rest.chars().find(|&ch| self.index.index(ch) >= self.buckets) {
            return Err(ParserError::UnindexedCharacter {
                option: spelling.to_string(),
                ch,
            });
        }

        let mut node = walk.node;
        for ch in rest.chars() {
            let next = NodeId(self.nodes.len());
            self.nodes.push(Node::new(self.buckets));
            let bucket = self.index.index(ch);
            self.nodes[node.0].children[bucket] = Some(next);
            node = next;
        }
        self.nodes[node.0].terminal = Some(spelling.to_string());

        debug!(
            option = spelling,
            created = rest.chars().count(),
            "inserted option spelling"
        );
        Ok(node)
    }

    /// Spelling registered at `node`, if it is terminal.
    pub fn terminal(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0)?.terminal.as_deref()
    }

    /// Target bound at `node`.
    pub fn target(&self, node: NodeId) -> Option<TargetId> {
        self.nodes.get(node.0)?.target
    }

    pub(crate) fn set_target(&mut self, node: NodeId, target: TargetId) {
        self.nodes[node.0].target = Some(target);
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Child of `node` along `ch`. Buckets past `bucket_count` have no edge.
    fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0]
            .children
            .get(self.index.index(ch))
            .copied()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use crate::AsciiFold;

    use super::*;

    fn trie_with(spellings: &[&str]) -> Trie<AsciiFold> {
        let mut trie = Trie::new(AsciiFold);
        for spelling in spellings {
            trie.insert(spelling).unwrap();
        }
        trie
    }

    #[test]
    fn test_insert_shares_prefix_nodes() {
        let trie = trie_with(&["-test", "-t"]);
        // root, '-', 't', 'e', 's', 't'
        assert_eq!(trie.len(), 6);
        let walk = trie.walk("-t");
        assert_eq!(trie.terminal(walk.node), Some("-t"));
    }

    #[test]
    fn test_insert_rejects_empty_spelling() {
        let mut trie = Trie::new(AsciiFold);
        assert_eq!(trie.insert(""), Err(ParserError::EmptyOption));
        assert!(trie.is_empty());
        assert_eq!(trie.terminal(NodeId::ROOT), None);
    }

    #[test]
    fn test_insert_collision_is_non_destructive() {
        let mut trie = trie_with(&["-verbose"]);
        let before = trie.len();
        assert_eq!(
            trie.insert("-VERBOSE"),
            Err(ParserError::MultipleDefinition("-VERBOSE".to_string()))
        );
        assert_eq!(trie.len(), before);
        assert_eq!(trie.terminal(trie.walk("-verbose").node), Some("-verbose"));
    }

    #[test]
    fn test_walk_stops_at_first_missing_edge() {
        let trie = trie_with(&["-f"]);
        let walk = trie.walk("-fhello");
        assert_eq!(walk.consumed, 2);
        assert_eq!(walk.remainder("-fhello"), "hello");
        assert_eq!(trie.terminal(walk.node), Some("-f"));
    }

    #[test]
    fn test_walk_hint_is_deepest_terminal_ancestor() {
        let trie = trie_with(&["-f", "-fdebug"]);
        let walk = trie.walk("-fdex");
        assert_eq!(walk.remainder("-fdex"), "x");
        assert_eq!(trie.terminal(walk.node), None);
        assert_eq!(walk.hint.and_then(|id| trie.terminal(id)), Some("-f"));

        let walk = trie.walk("-fdebugger");
        assert_eq!(walk.hint.and_then(|id| trie.terminal(id)), Some("-fdebug"));
    }

    #[test]
    fn test_walk_hint_ignores_deeper_terminals() {
        let trie = trie_with(&["-test"]);
        let walk = trie.walk("-te");
        assert_eq!(walk.consumed, 3);
        assert_eq!(walk.hint, None);
    }

    #[test]
    fn test_walk_disjoint_spellings_do_not_share_nodes() {
        let trie = trie_with(&["alpha", "-beta"]);
        let alpha = trie.walk("alpha").node;
        let beta = trie.walk("-beta").node;
        assert_ne!(alpha, beta);
        assert_eq!(trie.walk("-alpha").node, trie.walk("-").node);
    }

    #[test]
    fn test_walk_keeps_multibyte_remainder_intact() {
        let trie = trie_with(&["-name"]);
        let walk = trie.walk("-name=Zoë");
        assert_eq!(walk.remainder("-name=Zoë"), "=Zoë");
    }

    /// Gives every code point below U+0100 its own bucket and everything
    /// above bucket 256, one past the scanned domain.
    struct Latin1Buckets;

    impl CharIndex for Latin1Buckets {
        fn index(&self, ch: char) -> usize {
            (ch as usize).min(256)
        }
    }

    #[test]
    fn test_walk_treats_out_of_range_bucket_as_missing_edge() {
        let mut trie = Trie::new(Latin1Buckets);
        assert_eq!(trie.len(), 1);
        trie.insert("-x").unwrap();

        let walk = trie.walk("\u{100}");
        assert_eq!(walk.node, NodeId::ROOT);
        assert_eq!(walk.consumed, 0);

        let walk = trie.walk("-\u{4e00}x");
        assert_eq!(walk.remainder("-\u{4e00}x"), "\u{4e00}x");
        assert_eq!(walk.hint, None);
    }

    #[test]
    fn test_insert_rejects_out_of_range_bucket_without_mutating() {
        let mut trie = Trie::new(Latin1Buckets);
        let before = trie.len();
        assert_eq!(
            trie.insert("-\u{100}"),
            Err(ParserError::UnindexedCharacter {
                option: "-\u{100}".to_string(),
                ch: '\u{100}',
            })
        );
        assert_eq!(trie.len(), before);
        assert!(trie.insert("-\u{ff}").is_ok());
    }

    #[test]
    fn test_non_ascii_follows_space_edge() {
        let trie = trie_with(&["a b"]);
        let walk = trie.walk("a\u{e9}b");
        assert_eq!(trie.terminal(walk.node), Some("a b"));
    }
}
