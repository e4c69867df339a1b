//! Path-string level registration and lookup.
//!
//! # Responsibilities
//! - Normalize raw paths into segments before touching the trie
//! - Fall back to the not-found handler on any miss
//! - Treat the empty path as a miss without consulting the trie
//!
//! # Design Decisions
//! - Every operation is total; a miss is a normal return value
//! - Handlers are opaque: stored and returned, never invoked
//! - No internal locking. Register at startup, then share behind a lock
//!   or an `Arc` if lookups happen on several threads

use tracing::{debug, trace};

use crate::routing::path::{join_segments, split_path};
use crate::routing::trie::PathTrie;

/// Maps request paths to handlers, with a fixed fallback.
///
/// ```
/// use trie_router::routing::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new("root handler", "not found handler");
/// dispatcher.register("/home/about", "about handler");
///
/// assert_eq!(*dispatcher.resolve("/home/about/"), "about handler");
/// assert_eq!(*dispatcher.resolve("/home/contact"), "not found handler");
/// assert_eq!(*dispatcher.resolve("/"), "root handler");
/// ```
///
/// Sharing across threads is left to the caller:
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use trie_router::routing::Dispatcher;
///
/// let shared = Arc::new(RwLock::new(Dispatcher::<String>::new(
///     "root".into(),
///     "missing".into(),
/// )));
/// shared.write().unwrap().register("/api", "api".into());
///
/// let reader = Arc::clone(&shared);
/// let handle = std::thread::spawn(move || reader.read().unwrap().resolve("/api").clone());
/// assert_eq!(handle.join().unwrap(), "api");
/// ```
#[derive(Debug)]
pub struct Dispatcher<H = String> {
    trie: PathTrie<H>,
    not_found_handler: H,
}

impl<H> Dispatcher<H> {
    /// Create a dispatcher. `root_handler` answers `/`; `not_found_handler`
    /// answers every miss and cannot be changed afterwards.
    pub fn new(root_handler: H, not_found_handler: H) -> Self {
        Self {
            trie: PathTrie::new(root_handler),
            not_found_handler,
        }
    }

    /// Register `handler` for `path`. Re-registering a path replaces its
    /// handler; registering `/` replaces the root handler.
    pub fn register(&mut self, path: &str, handler: H) {
        let replaced = self.trie.insert(split_path(path), handler).is_some();
        debug!(
            path,
            segments = split_path(path).count(),
            replaced,
            "Registered route"
        );
    }

    /// Resolve `path` to its handler, or to the not-found handler.
    pub fn resolve(&self, path: &str) -> &H {
        match self.lookup(path) {
            Some(handler) => {
                trace!(path, "Route matched");
                handler
            }
            None => {
                trace!(path, "No route matched, using not-found handler");
                &self.not_found_handler
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but without the fallback.
    /// The empty path never matches.
    pub fn lookup(&self, path: &str) -> Option<&H> {
        if path.is_empty() {
            return None;
        }
        self.trie.find(split_path(path))
    }

    pub fn root_handler(&self) -> &H {
        self.trie.root_handler()
    }

    pub fn not_found_handler(&self) -> &H {
        &self.not_found_handler
    }

    /// Number of paths with a handler, the root included.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Registered routes in canonical form (`/` for the root), sorted.
    pub fn routes(&self) -> Vec<(String, &H)> {
        self.trie
            .entries()
            .into_iter()
            .map(|(segments, handler)| (join_segments(&segments), handler))
            .collect()
    }
}
