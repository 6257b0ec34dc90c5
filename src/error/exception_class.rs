use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::hash::Hash;
use std::hash::Hasher;

/// Runtime type of an [`Exception`], used for handler filtering.
///
/// Classes form a single-inheritance hierarchy declared up front as
/// constants. A handler registered for a class is eligible for exceptions
/// of that class and of every class that descends from it.
///
/// Classes are identified by their full ancestry: two classes compare equal
/// when their names match at every level up to the root. Constants are
/// copied at each use, so address identity is never used.
///
/// # Examples
///
/// ```
/// use faultline::error::ExceptionClass;
///
/// const VALIDATION: ExceptionClass =
///   ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));
///
/// assert!(VALIDATION.is_a(&ExceptionClass::EXCEPTION));
/// assert!(!VALIDATION.is_a(&ExceptionClass::RUNTIME_ERROR));
/// ```
///
/// [`Exception`]: crate::error::Exception
#[derive(Clone, Copy)]
pub struct ExceptionClass {
  name: &'static str,
  parent: Option<&'static ExceptionClass>,
}

impl ExceptionClass {
  /// Root of the hierarchy; every class is an `EXCEPTION`.
  pub const EXCEPTION: Self = Self::new("exception", None);

  /// Class of exceptions converted from recoverable runtime errors.
  pub const RUNTIME_ERROR: Self = Self::new("runtime error", Some(&Self::EXCEPTION));

  /// Class of exceptions promoted from fatal signals at teardown.
  pub const FATAL_ERROR: Self = Self::new("fatal error", Some(&Self::RUNTIME_ERROR));

  /// Class of panics whose payload was not an [`Exception`].
  ///
  /// [`Exception`]: crate::error::Exception
  pub const PANIC: Self = Self::new("panic", Some(&Self::EXCEPTION));

  /// Declares a new class with an optional parent.
  #[inline]
  pub const fn new(name: &'static str, parent: Option<&'static ExceptionClass>) -> Self {
    Self { name, parent }
  }

  /// Returns the class name.
  #[inline]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Returns the direct parent, or `None` for a root class.
  #[inline]
  pub const fn parent(&self) -> Option<&'static ExceptionClass> {
    self.parent
  }

  /// Returns `true` if `self` is `base` or descends from it.
  pub fn is_a(&self, base: &ExceptionClass) -> bool {
    self.ancestry().any(|class| class == base)
  }

  /// Returns the number of ancestors between this class and its root.
  pub fn depth(&self) -> usize {
    self.ancestry().count() - 1
  }

  /// Returns an iterator over this class followed by each of its ancestors.
  #[inline]
  pub fn ancestry(&self) -> Ancestry<'_> {
    Ancestry { next: Some(self) }
  }
}

impl PartialEq for ExceptionClass {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.ancestry().map(Self::name).eq(other.ancestry().map(Self::name))
  }
}

impl Eq for ExceptionClass {}

impl Hash for ExceptionClass {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    for class in self.ancestry() {
      class.name.hash(state);
    }
  }
}

impl Debug for ExceptionClass {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for ExceptionClass {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.name)
  }
}

// -----------------------------------------------------------------------------
// Ancestry
// -----------------------------------------------------------------------------

/// Iterator returned by [`ExceptionClass::ancestry`].
#[derive(Clone, Debug)]
pub struct Ancestry<'a> {
  next: Option<&'a ExceptionClass>,
}

impl<'a> Iterator for Ancestry<'a> {
  type Item = &'a ExceptionClass;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let current: &'a ExceptionClass = self.next?;
    self.next = current.parent;
    Some(current)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
