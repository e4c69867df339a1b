//! Configuration schema definitions.
//!
//! This module defines the route table file format.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::routing::path::{join_segments, split_path};
use crate::routing::Dispatcher;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Handler returned for `/`.
    pub root_handler: String,

    /// Handler returned whenever no route matches.
    pub not_found_handler: String,

    /// Routes, registered in file order.
    pub routes: Vec<RouteConfig>,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root_handler: "root handler".to_string(),
            not_found_handler: "not found handler".to_string(),
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Build a dispatcher with every configured route registered.
    ///
    /// Later entries for the same normalized path win; the earlier ones are
    /// reported at `warn`.
    pub fn build_dispatcher(&self) -> Dispatcher {
        let mut dispatcher =
            Dispatcher::new(self.root_handler.clone(), self.not_found_handler.clone());
        let mut seen = HashSet::new();

        for route in &self.routes {
            let canonical = join_segments(&split_path(&route.path).collect::<Vec<_>>());
            if !seen.insert(canonical.clone()) {
                tracing::warn!(
                    path = %route.path,
                    canonical = %canonical,
                    handler = %route.handler,
                    "Duplicate route, replacing earlier handler"
                );
            }
            dispatcher.register(&route.path, route.handler.clone());
        }

        tracing::info!(routes = dispatcher.len(), "Dispatcher built");
        dispatcher
    }
}

/// A single path → handler entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path as a caller would write it; normalized on registration.
    pub path: String,

    /// Opaque handler label.
    pub handler: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handler: handler.into(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive (e.g. "info", "trie_router=debug").
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// Emit JSON lines instead of human-readable text.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
