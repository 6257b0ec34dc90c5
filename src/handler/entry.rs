use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::panic;
use std::panic::AssertUnwindSafe;

use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::Location;
use crate::handler::Filter;
use crate::handler::HandlerResult;
use crate::handler::Outcome;
use crate::utils;

type Callback = Box<dyn Fn(&Exception) -> HandlerResult + Send + Sync + 'static>;

/// A registered exception handler.
///
/// Eligibility is declared explicitly at construction through a [`Filter`].
/// The registration site is recorded and used as the location of panics
/// raised from within the handler when no better location is known.
pub struct HandlerEntry {
  filter: Filter,
  callback: Callback,
  site: Location,
}

impl HandlerEntry {
  /// Creates a handler that takes no arguments and sees every exception.
  #[track_caller]
  pub fn any<F, R>(callback: F) -> Self
  where
    F: Fn() -> R + Send + Sync + 'static,
    R: Outcome,
  {
    Self::with_filter(Filter::Any, move |_| callback())
  }

  /// Creates a handler that sees every exception.
  #[track_caller]
  pub fn all<F, R>(callback: F) -> Self
  where
    F: Fn(&Exception) -> R + Send + Sync + 'static,
    R: Outcome,
  {
    Self::with_filter(Filter::Any, callback)
  }

  /// Creates a handler that sees exceptions that are a `class`.
  ///
  /// # Examples
  ///
  /// ```
  /// use faultline::error::{Exception, ExceptionClass};
  /// use faultline::handler::HandlerEntry;
  ///
  /// const VALIDATION: ExceptionClass =
  ///   ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));
  ///
  /// let entry = HandlerEntry::on(&VALIDATION, |_| "validation failed");
  ///
  /// assert!(entry.handles(&Exception::new(&VALIDATION, "bad email")));
  /// assert!(!entry.handles(&Exception::new(&ExceptionClass::RUNTIME_ERROR, "oops")));
  /// ```
  #[track_caller]
  pub fn on<F, R>(class: &'static ExceptionClass, callback: F) -> Self
  where
    F: Fn(&Exception) -> R + Send + Sync + 'static,
    R: Outcome,
  {
    Self::with_filter(Filter::Class(class), callback)
  }

  /// Creates a handler that sees exceptions that are any of `classes`.
  #[track_caller]
  pub fn one_of<F, R>(classes: &'static [&'static ExceptionClass], callback: F) -> Self
  where
    F: Fn(&Exception) -> R + Send + Sync + 'static,
    R: Outcome,
  {
    Self::with_filter(Filter::OneOf(classes), callback)
  }

  /// Creates a handler with an explicit filter.
  #[track_caller]
  pub fn with_filter<F, R>(filter: Filter, callback: F) -> Self
  where
    F: Fn(&Exception) -> R + Send + Sync + 'static,
    R: Outcome,
  {
    Self {
      filter,
      callback: Box::new(move |exception: &Exception| callback(exception).into_outcome()),
      site: Location::caller(),
    }
  }

  /// Returns the declared filter.
  #[inline]
  pub const fn filter(&self) -> Filter {
    self.filter
  }

  /// Returns where this handler was created.
  #[inline]
  pub const fn site(&self) -> &Location {
    &self.site
  }

  /// Returns `true` if this handler is eligible for `exception`.
  #[inline]
  pub fn handles(&self, exception: &Exception) -> bool {
    self.filter.accepts(exception)
  }

  /// Invokes the handler inside an isolation boundary.
  ///
  /// A panic escaping the callback is caught and returned as `Err`, the
  /// same as a handler returning an error.
  pub fn invoke(&self, exception: &Exception) -> HandlerResult {
    match panic::catch_unwind(AssertUnwindSafe(|| (self.callback)(exception))) {
      Ok(result) => result,
      Err(payload) => {
        let location: Location = utils::take_location().unwrap_or_else(|| self.site.clone());
        Err(Exception::from_panic(payload, location))
      }
    }
  }
}

impl Debug for HandlerEntry {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("HandlerEntry")
      .field("filter", &self.filter)
      .field("site", &self.site)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
