use std::borrow::Cow;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::Location;
use crate::signal::Severity;

/// A recoverable runtime error as reported by the host.
///
/// Raw signals never reach the handler chain directly: they are converted
/// into an [`Exception`] first, or promoted at teardown.
///
/// [`Exception`]: crate::error::Exception
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSignal {
  level: Severity,
  error: String,
  location: Location,
}

impl RawSignal {
  /// Creates a new `RawSignal`.
  #[inline]
  pub fn new<E, F>(level: Severity, error: E, file: F, line: u32) -> Self
  where
    E: Into<String>,
    F: Into<Cow<'static, str>>,
  {
    Self {
      level,
      error: error.into(),
      location: Location::new(file, line),
    }
  }

  /// Returns the severity level.
  #[inline]
  pub const fn level(&self) -> Severity {
    self.level
  }

  /// Returns the error message.
  #[inline]
  pub fn message(&self) -> &str {
    self.error.as_str()
  }

  /// Returns the location the host attributed the signal to.
  #[inline]
  pub const fn location(&self) -> &Location {
    &self.location
  }

  #[inline]
  pub(crate) fn into_parts(self) -> (Severity, String, Location) {
    (self.level, self.error, self.location)
  }
}

impl Display for RawSignal {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}: {} in {}", self.level, self.error, self.location)
  }
}
