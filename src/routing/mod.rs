//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! register(path, handler)
//!     → path.rs (strip boundary slashes, split into segments)
//!     → trie.rs (walk/create nodes, store handler)
//!
//! resolve(path)
//!     → "" short-circuits to the not-found handler
//!     → path.rs (segments)
//!     → trie.rs (exact walk, stop at first missing child)
//!     → Return: stored handler or not-found handler
//! ```
//!
//! # Design Decisions
//! - Exact segment-sequence matching only: no wildcards, no parameters
//! - Interior `//` is kept as an empty segment, not collapsed
//! - Handlers are `Option<H>` internally, so "absent" never collides with a
//!   real handler value

pub mod dispatcher;
pub mod path;
pub mod trie;

pub use dispatcher::Dispatcher;
pub use trie::PathTrie;
