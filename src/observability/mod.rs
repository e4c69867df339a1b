//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr (text or JSON lines)
//! ```

pub mod logging;

pub use logging::init_logging;
