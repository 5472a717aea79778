//! Logging hooks.
//!
//! With the `tracing` feature these forward to `tracing`; without it they
//! compile to nothing.

use crate::error::GraphError;

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}

pub(crate) use log_trace;

/// Records a mutation that the silent API turned into a no-op.
#[inline]
pub(crate) fn rejected(op: &'static str, err: GraphError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(op, %err, "graph mutation ignored");
    #[cfg(not(feature = "tracing"))]
    let _ = (op, err);
}
