//! Basic execution timing utilities.

use std::time::Duration;
use std::time::Instant;

#[inline(always)]
pub(crate) fn measure_fn<F, R>(f: F) -> (R, Duration)
where
  F: FnOnce() -> R,
{
  let instant: Instant = Instant::now();
  let output: R = f();

  (output, instant.elapsed())
}
