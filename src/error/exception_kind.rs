use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Origin of an exception, independent of its [`ExceptionClass`].
///
/// [`ExceptionClass`]: crate::error::ExceptionClass
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionKind {
  /// Converted from a recoverable runtime error signal.
  RuntimeError,
  /// Raised directly by user code.
  Thrown,
  /// Raised by a handler while it was handling another exception.
  ///
  /// Rendered with the handler-failure label by the default formatter.
  HandlerFailure,
  /// Promoted from a fatal signal discovered at process teardown.
  FatalShutdown,
}

impl ExceptionKind {
  #[inline]
  pub(crate) const fn label(&self) -> &'static str {
    match self {
      Self::RuntimeError => "runtime-error",
      Self::Thrown => "thrown",
      Self::HandlerFailure => "handler-failure",
      Self::FatalShutdown => "fatal-shutdown",
    }
  }
}

impl Display for ExceptionKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.label())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::ExceptionKind;

  #[test]
  fn test_display() {
    assert_eq!(format!("{}", ExceptionKind::RuntimeError), "runtime-error");
    assert_eq!(format!("{}", ExceptionKind::Thrown), "thrown");
    assert_eq!(format!("{}", ExceptionKind::HandlerFailure), "handler-failure");
    assert_eq!(format!("{}", ExceptionKind::FatalShutdown), "fatal-shutdown");
  }
}
