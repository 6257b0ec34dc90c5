use tracing::debug;

use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::ExceptionKind;
use crate::signal::RawSignal;

/// Promotes the last captured signal into an exception at teardown.
///
/// Returns `None` when nothing was captured, or when the captured signal is
/// not fatal: non-fatal signals were either handled through the normal path
/// already or are irrelevant once the process is ending.
pub fn promote(last: Option<RawSignal>) -> Option<Exception> {
  let signal: RawSignal = last?;

  if !signal.level().is_fatal() {
    debug!(target: "faultline", level = %signal.level(), "teardown signal ignored");
    return None;
  }

  debug!(target: "faultline", level = %signal.level(), "teardown signal promoted");

  Some(Exception::from_signal(
    ExceptionKind::FatalShutdown,
    &ExceptionClass::FATAL_ERROR,
    signal,
  ))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
