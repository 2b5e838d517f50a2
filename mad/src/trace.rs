//! Trace line formats

use std::fmt;

/// One line of trace output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine {
    /// Banner written by `start`
    Banner { start: i64 },
    /// One iteration of the loop in `bar`; `count` mirrors the loop index
    BarLoop { i: i64, count: i64 },
    /// `foo` hit a non-positive level
    Base,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLine::Banner { start } => write!(f, "Starting madness with {}", start),
            TraceLine::BarLoop { i, count } => write!(f, "bar loop i={}, count={}", i, count),
            TraceLine::Base => write!(f, "Reached base in foo"),
        }
    }
}
