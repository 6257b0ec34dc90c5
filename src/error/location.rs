use std::borrow::Cow;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::panic;

/// Source position a failure is attributed to.
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Location {
  file: Cow<'static, str>,
  line: u32,
}

impl Location {
  /// Creates a new `Location`.
  #[inline]
  pub fn new<F>(file: F, line: u32) -> Self
  where
    F: Into<Cow<'static, str>>,
  {
    Self {
      file: file.into(),
      line,
    }
  }

  /// Returns the location of the caller.
  ///
  /// Propagates through `#[track_caller]` functions.
  #[inline]
  #[track_caller]
  pub fn caller() -> Self {
    Self::from(panic::Location::caller())
  }

  /// Returns the file name.
  #[inline]
  pub fn file(&self) -> &str {
    &self.file
  }

  /// Returns the line number.
  #[inline]
  pub const fn line(&self) -> u32 {
    self.line
  }
}

impl Debug for Location {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for Location {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{}", self.file, self.line)
  }
}

impl From<&panic::Location<'_>> for Location {
  #[inline]
  fn from(other: &panic::Location<'_>) -> Self {
    Self::new(other.file().to_owned(), other.line())
  }
}
