//! Session - one run of the recursion
//!
//! A `Session` owns the sink that trace lines are written to. `foo` and `bar`
//! call each other through it; every `foo -> bar -> foo` cycle lowers the
//! argument by two, so any non-negative start reaches the base case.

use std::io::Write;

use log::{debug, trace};

use crate::error::TraceError;
use crate::limit::limit;
use crate::trace::TraceLine;

/// Handle for a single run, writing trace lines to `W`
pub struct Session<W: Write> {
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session that writes to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the banner, then recurse from `x`
    pub fn start(&mut self, x: i64) -> Result<(), TraceError> {
        debug!("start: x={}", x);
        self.emit(TraceLine::Banner { start: x })?;
        self.foo(x)
    }

    /// Recursion head: hand off to `bar` while `level` is positive
    pub fn foo(&mut self, level: i64) -> Result<(), TraceError> {
        trace!("foo: level={}", level);
        if level > 0 {
            self.bar(level - 1)
        } else {
            debug!("foo: base case at level={}", level);
            self.emit(TraceLine::Base)
        }
    }

    /// Emit `limit(count) + 1` loop lines, then call `foo(count - 1)`.
    ///
    /// The printed `count` is the loop index, not the argument.
    pub fn bar(&mut self, count: i64) -> Result<(), TraceError> {
        let bound = limit(count);
        trace!("bar: count={} bound={}", count, bound);
        for i in 0..=bound {
            let shadowed_count = i;
            self.emit(TraceLine::BarLoop { i, count: shadowed_count })?;
        }
        self.foo(count.saturating_sub(1))
    }

    /// Flush the sink and hand it back
    pub fn finish(mut self) -> Result<W, TraceError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, line: TraceLine) -> Result<(), TraceError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}
