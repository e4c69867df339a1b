//! Segment-keyed prefix tree.
//!
//! # Responsibilities
//! - Store an optional handler at any node, including the root
//! - Create waypoint nodes lazily on insert
//! - Exact full-sequence lookup (no wildcards, no prefix fallback)
//!
//! # Design Decisions
//! - Each node owns its children outright; no back-references
//! - All walks are iterative, so depth is bounded by memory rather than stack
//! - Nodes are never removed; the tree only grows

use std::collections::HashMap;
use std::fmt;

use crate::routing::path::join_segments;

struct TrieNode<H> {
    children: HashMap<String, TrieNode<H>>,
    handler: Option<H>,
}

impl<H> Default for TrieNode<H> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            handler: None,
        }
    }
}

/// A prefix tree keyed by path segments.
///
/// The root always carries a handler: the one given to [`PathTrie::new`], or
/// whatever a later zero-segment insert replaced it with.
pub struct PathTrie<H> {
    root: TrieNode<H>,
    len: usize,
}

impl<H> PathTrie<H> {
    /// Create a trie whose root resolves to `root_handler`.
    pub fn new(root_handler: H) -> Self {
        Self {
            root: TrieNode {
                children: HashMap::new(),
                handler: Some(root_handler),
            },
            len: 1,
        }
    }

    /// Store `handler` at the node reached by `segments`, creating any
    /// missing nodes on the way.
    ///
    /// An empty sequence targets the root. Returns the handler previously
    /// stored at that exact node, if any; the new one always wins.
    pub fn insert<I>(&mut self, segments: I, handler: H) -> Option<H>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut node = &mut self.root;
        for segment in segments {
            node = node.children.entry(segment.as_ref().to_owned()).or_default();
        }

        let previous = node.handler.replace(handler);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Look up the handler stored at exactly `segments`.
    ///
    /// Stops at the first missing child. A waypoint node that was only
    /// created on the way to a longer route has no handler of its own.
    pub fn find<I>(&self, segments: I) -> Option<&H>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut node = &self.root;
        for segment in segments {
            node = node.children.get(segment.as_ref())?;
        }
        node.handler.as_ref()
    }

    /// The handler stored at the root.
    pub fn root_handler(&self) -> &H {
        self.root
            .handler
            .as_ref()
            .expect("root handler is set at construction and never cleared")
    }

    /// Number of nodes carrying a handler. The root is always counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the root handler counts as an entry.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored handler with the segment sequence leading to it,
    /// ordered by segment sequence.
    pub fn entries(&self) -> Vec<(Vec<&str>, &H)> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(handler) = &self.root.handler {
            out.push((Vec::new(), handler));
        }

        // (depth, segment, node): `path` is truncated back to `depth` before
        // each visit, so only handler-bearing nodes pay for a copy.
        let mut path: Vec<&str> = Vec::new();
        let mut stack: Vec<(usize, &str, &TrieNode<H>)> = self
            .root
            .children
            .iter()
            .map(|(segment, child)| (0, segment.as_str(), child))
            .collect();

        while let Some((depth, segment, node)) = stack.pop() {
            path.truncate(depth);
            path.push(segment);
            if let Some(handler) = &node.handler {
                out.push((path.clone(), handler));
            }
            stack.extend(
                node.children
                    .iter()
                    .map(|(segment, child)| (depth + 1, segment.as_str(), child)),
            );
        }

        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

impl<H> Drop for PathTrie<H> {
    fn drop(&mut self) {
        // Detach children level by level so no node is dropped while it
        // still owns a subtree.
        let mut pending: Vec<TrieNode<H>> =
            self.root.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for PathTrie<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries()
                    .into_iter()
                    .map(|(segments, handler)| (join_segments(&segments), handler)),
            )
            .finish()
    }
}
