//! Madness - mutual recursion trace demo
//!
//! Two procedures call each other until the argument runs out, writing one
//! line per step to an output sink.
//!
//! # Call graph
//!
//! ```text
//! start(x) ── banner ──> foo(x)
//! foo(level > 0) ──────> bar(level - 1)
//! foo(level <= 0) ─────> "Reached base in foo"
//! bar(count) ── limit(count) + 1 loop lines ──> foo(count - 1)
//! ```
//!
//! # Example
//!
//! ```
//! use madness::Session;
//!
//! let mut session = Session::new(Vec::new());
//! session.start(1)?;
//! let out = String::from_utf8(session.finish()?).unwrap();
//! assert_eq!(out.lines().count(), 5);
//! # Ok::<(), madness::TraceError>(())
//! ```

pub mod cli;
pub mod config;
mod error;
mod limit;
mod session;
mod trace;

pub use error::TraceError;
pub use limit::limit;
pub use session::Session;
pub use trace::TraceLine;

/// Start value used when neither the CLI nor a config file sets one
pub const DEFAULT_START: u32 = 6;

/// Largest start value the binary accepts; recursion runs on the native stack
pub const MAX_START: u32 = 4096;
