//! Trie-based path router.
//!
//! Paths are split into `/`-separated segments and stored in a prefix tree;
//! lookups require an exact segment-sequence match and fall back to a fixed
//! not-found handler.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Dispatcher, PathTrie};
