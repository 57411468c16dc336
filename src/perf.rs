//! Timing instrumentation for the pointer hot path.
//!
//! Pointer-move events arrive at display rate during a drag. Wrap their
//! handlers in `profile_scope!` to log any invocation that blows the
//! frame budget:
//!
//! ```ignore
//! fn handle_mouse_move() {
//!     profile_scope!("handle_mouse_move");
//!     // ...
//! }
//! ```
//!
//! The macro expands to nothing unless the `profiling` feature is enabled.

use std::time::Instant;
use tracing::{trace, warn};

/// Frame budget at 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Threshold used by `profile_scope!` without an explicit one
pub const DEFAULT_PROFILE_THRESHOLD_MS: f64 = 1.0;

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer: logs on drop if the scope took longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, DEFAULT_PROFILE_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > TARGET_FRAME_MS {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Operation exceeded frame budget"
            );
        } else if elapsed_ms > self.threshold_ms {
            trace!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Slow operation"
            );
        }
    }
}
