use tracing::trace;

use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::ExceptionKind;
use crate::signal::RawSignal;
use crate::signal::Severity;

/// Result of converting a [`RawSignal`].
#[derive(Debug)]
#[must_use]
pub enum Conversion {
  /// The signal is reportable and was converted.
  Converted(Exception),
  /// The signal's level is outside the active severity mask.
  Suppressed,
}

impl Conversion {
  /// Returns the converted exception, if any.
  #[inline]
  pub fn into_exception(self) -> Option<Exception> {
    match self {
      Self::Converted(exception) => Some(exception),
      Self::Suppressed => None,
    }
  }

  /// Returns `true` if the signal was suppressed.
  #[inline]
  pub const fn is_suppressed(&self) -> bool {
    matches!(self, Self::Suppressed)
  }
}

/// Converts a raw runtime error into an [`Exception`] under `mask`.
///
/// Signals whose level does not intersect `mask` are suppressed. Everything
/// else becomes a [`RUNTIME_ERROR`] exception with code `0`, attributed to
/// the signal's own location.
///
/// [`RUNTIME_ERROR`]: ExceptionClass::RUNTIME_ERROR
pub fn convert(signal: RawSignal, mask: Severity) -> Conversion {
  if !signal.level().is_reported(mask) {
    trace!(target: "faultline", level = %signal.level(), "signal suppressed");
    return Conversion::Suppressed;
  }

  trace!(target: "faultline", level = %signal.level(), "signal converted");

  Conversion::Converted(Exception::from_signal(
    ExceptionKind::RuntimeError,
    &ExceptionClass::RUNTIME_ERROR,
    signal,
  ))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::Exception;
  use crate::error::ExceptionClass;
  use crate::error::ExceptionKind;
  use crate::error::Location;
  use crate::signal::Conversion;
  use crate::signal::RawSignal;
  use crate::signal::Severity;
  use crate::signal::convert;

  #[test]
  fn test_suppressed_outside_mask() {
    let signal: RawSignal = RawSignal::new(Severity::NOTICE, "undefined index", "a.rs", 3);
    let mask: Severity = Severity::all().difference(Severity::NOTICE);

    assert!(convert(signal, mask).is_suppressed());
  }

  #[test]
  fn test_suppressed_empty_mask() {
    let signal: RawSignal = RawSignal::new(Severity::ERROR, "oops", "a.rs", 3);

    assert!(convert(signal, Severity::empty()).is_suppressed());
  }

  #[test]
  fn test_converted() {
    let signal: RawSignal = RawSignal::new(Severity::WARNING, "division by zero", "math.rs", 12);
    let conversion: Conversion = convert(signal, Severity::WARNING | Severity::ERROR);

    let exception: Exception = match conversion {
      Conversion::Converted(exception) => exception,
      Conversion::Suppressed => panic!("warning should be converted"),
    };

    assert_eq!(exception.kind(), ExceptionKind::RuntimeError);
    assert_eq!(exception.class(), &ExceptionClass::RUNTIME_ERROR);
    assert_eq!(exception.class().name(), "runtime error");
    assert_eq!(exception.code(), 0);
    assert_eq!(exception.message(), "division by zero");
    assert_eq!(exception.location(), &Location::new("math.rs", 12));
    assert_eq!(exception.severity(), Some(Severity::WARNING));
  }
}
