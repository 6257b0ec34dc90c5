use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::ExceptionClass;
use crate::error::ExceptionKind;
use crate::error::Location;
use crate::signal::RawSignal;
use crate::signal::Severity;
use crate::utils;

/// The structured representation every failure signal is converted into.
///
/// An `Exception` is immutable once it enters the dispatcher. The builder
/// methods ([`with_code`], [`with_location`]) consume the value and are
/// meant to be used at the raise site.
///
/// # Display Format
///
/// Exceptions format as: `{message} in {file}:{line}`
///
/// Example: `boom in src/main.rs:10`
///
/// [`with_code`]: Exception::with_code
/// [`with_location`]: Exception::with_location
pub struct Exception {
  kind: ExceptionKind,
  class: &'static ExceptionClass,
  error: String,
  code: i64,
  location: Location,
  severity: Option<Severity>,
  trace: Backtrace,
}

impl Exception {
  /// Creates a new user-thrown exception of the given class.
  ///
  /// The location defaults to the caller; a backtrace is captured at the
  /// same point. This function is typically invoked via the [`raise!`]
  /// macro rather than directly.
  ///
  /// # Examples
  ///
  /// ```
  /// use faultline::error::{Exception, ExceptionClass, ExceptionKind};
  ///
  /// let exception = Exception::new(&ExceptionClass::EXCEPTION, "invalid input");
  ///
  /// assert_eq!(exception.kind(), ExceptionKind::Thrown);
  /// assert_eq!(exception.code(), 0);
  /// ```
  ///
  /// [`raise!`]: crate::raise
  #[inline]
  #[track_caller]
  pub fn new<T>(class: &'static ExceptionClass, error: T) -> Self
  where
    T: Display,
  {
    Self {
      kind: ExceptionKind::Thrown,
      class,
      error: error.to_string(),
      code: 0,
      location: Location::caller(),
      severity: None,
      trace: Backtrace::capture(),
    }
  }

  /// Builds an exception from a raw runtime signal.
  pub(crate) fn from_signal(
    kind: ExceptionKind,
    class: &'static ExceptionClass,
    signal: RawSignal,
  ) -> Self {
    let (level, error, location): (Severity, String, Location) = signal.into_parts();

    Self {
      kind,
      class,
      error,
      code: 0,
      location,
      severity: Some(level),
      trace: Backtrace::capture(),
    }
  }

  /// Builds an exception from a caught panic payload.
  ///
  /// Payloads raised with [`raise!`] are returned as-is; anything else
  /// becomes a [`PANIC`] exception attributed to `location`.
  ///
  /// [`raise!`]: crate::raise
  /// [`PANIC`]: ExceptionClass::PANIC
  pub fn from_panic(payload: Box<dyn Any + Send>, location: Location) -> Self {
    match payload.downcast::<Self>() {
      Ok(exception) => *exception,
      Err(payload) => Self {
        kind: ExceptionKind::Thrown,
        class: &ExceptionClass::PANIC,
        error: utils::payload_message(&*payload),
        code: 0,
        location,
        severity: None,
        trace: Backtrace::capture(),
      },
    }
  }

  /// Re-tags this exception as a failure inside a handler.
  #[inline]
  pub(crate) fn into_handler_failure(self) -> Self {
    Self {
      kind: ExceptionKind::HandlerFailure,
      ..self
    }
  }

  /// Sets the integer classification code.
  #[inline]
  pub fn with_code(self, code: i64) -> Self {
    Self { code, ..self }
  }

  /// Overrides the location the exception is attributed to.
  #[inline]
  pub fn with_location(self, location: Location) -> Self {
    Self { location, ..self }
  }

  /// Returns the origin of the exception.
  #[inline]
  pub const fn kind(&self) -> ExceptionKind {
    self.kind
  }

  /// Returns the runtime class used for handler filtering.
  #[inline]
  pub const fn class(&self) -> &'static ExceptionClass {
    self.class
  }

  /// Returns the human-readable error message.
  #[inline]
  pub fn message(&self) -> &str {
    self.error.as_str()
  }

  /// Returns the integer classification code, `0` unless set.
  #[inline]
  pub const fn code(&self) -> i64 {
    self.code
  }

  /// Returns the location the exception is attributed to.
  #[inline]
  pub const fn location(&self) -> &Location {
    &self.location
  }

  /// Returns the severity of the originating signal, if any.
  #[inline]
  pub const fn severity(&self) -> Option<Severity> {
    self.severity
  }

  /// Returns the captured backtrace.
  ///
  /// Backtrace availability depends on the `RUST_BACKTRACE` environment
  /// variable and platform support.
  #[inline]
  pub const fn trace(&self) -> &Backtrace {
    &self.trace
  }
}

impl Debug for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{} - {}", self.kind, self.class, self)
  }
}

impl Display for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{} in {}", self.error, self.location)
  }
}

impl Error for Exception {}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
