use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::Exception;
use crate::error::ExceptionClass;

/// Declared eligibility of a handler.
///
/// A class filter matches the declared class and all of its descendants. A
/// filter naming classes that no exception ever descends from is valid and
/// simply never matches.
#[derive(Clone, Copy)]
pub enum Filter {
  /// Eligible for every exception.
  Any,
  /// Eligible for exceptions that are a `class`.
  Class(&'static ExceptionClass),
  /// Eligible for exceptions that are any of `classes`.
  OneOf(&'static [&'static ExceptionClass]),
}

impl Filter {
  /// Returns `true` if a handler with this filter should see `exception`.
  pub fn accepts(&self, exception: &Exception) -> bool {
    match self {
      Self::Any => true,
      Self::Class(class) => exception.class().is_a(class),
      Self::OneOf(classes) => classes.iter().any(|class| exception.class().is_a(class)),
    }
  }
}

impl Debug for Filter {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Any => f.write_str("*"),
      Self::Class(class) => Debug::fmt(class, f),
      Self::OneOf(classes) => f.debug_set().entries(classes.iter()).finish(),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
