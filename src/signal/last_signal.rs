use crate::loom::sync::Mutex;
use crate::signal::RawSignal;

/// Slot holding the most recent raw signal seen by the process.
///
/// This is the teardown-time introspection point: the host (or
/// [`init::handle_error`]) records signals as they happen, and the
/// teardown path takes whatever is left.
///
/// [`init::handle_error`]: crate::init::handle_error
#[derive(Debug)]
pub struct LastSignal {
  inner: Mutex<Option<RawSignal>>,
}

impl LastSignal {
  /// Creates a new, empty `LastSignal`.
  #[inline]
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(None),
    }
  }

  /// Records `signal`, replacing any previous one.
  #[inline]
  pub fn capture(&self, signal: RawSignal) {
    *self.inner.lock() = Some(signal);
  }

  /// Removes and returns the recorded signal.
  #[inline]
  pub fn take(&self) -> Option<RawSignal> {
    self.inner.lock().take()
  }

  /// Returns a copy of the recorded signal without removing it.
  #[inline]
  pub fn peek(&self) -> Option<RawSignal> {
    self.inner.lock().clone()
  }
}

impl Default for LastSignal {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(all(test, not(loom)))]
mod tests {
  use crate::signal::LastSignal;
  use crate::signal::RawSignal;
  use crate::signal::Severity;

  #[test]
  fn test_empty() {
    let slot: LastSignal = LastSignal::new();

    assert!(slot.peek().is_none());
    assert!(slot.take().is_none());
  }

  #[test]
  fn test_capture_replaces() {
    let slot: LastSignal = LastSignal::new();

    slot.capture(RawSignal::new(Severity::WARNING, "first", "a.rs", 1));
    slot.capture(RawSignal::new(Severity::PARSE, "second", "a.rs", 2));

    assert_eq!(slot.peek().map(|signal| signal.level()), Some(Severity::PARSE));
    assert_eq!(slot.take().map(|signal| signal.location().line()), Some(2));
    assert!(slot.take().is_none());
  }
}
