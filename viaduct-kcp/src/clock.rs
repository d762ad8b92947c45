//! Monotonic millisecond clock shared by every control block.

use std::sync::OnceLock;
use std::time::Instant;

static REF_TIME: OnceLock<Instant> = OnceLock::new();

/// Milliseconds elapsed since the first call in this process. Wraps after
/// ~49 days; all timestamp arithmetic is wrapping-aware.
pub(crate) fn current_ms() -> u32 {
    let start = REF_TIME.get_or_init(Instant::now);
    start.elapsed().as_millis() as u32
}

/// Signed distance between two wrapping timestamps.
pub(crate) fn time_diff(later: u32, earlier: u32) -> i32 {
    later.wrapping_sub(earlier) as i32
}
