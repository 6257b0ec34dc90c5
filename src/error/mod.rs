//! The exception model shared by every failure path.
//!
//! Recoverable runtime errors, panics raised by user code, failures inside
//! handlers, and fatal signals discovered at teardown are all represented
//! by a single [`Exception`] type before they reach the dispatcher.
//!
//! # Exception Model
//!
//! Exceptions carry:
//!
//! 1. **Kind**: where the failure came from ([`ExceptionKind`])
//! 2. **Class**: the runtime type used for handler filtering ([`ExceptionClass`])
//! 3. **Message**, **code**, and **location** for display
//!
//! # Raising Exceptions
//!
//! Use the [`raise!`] macro to construct an exception and unwind with it
//! as the panic payload:
//!
//! ```should_panic
//! use faultline::error::ExceptionClass;
//! use faultline::raise;
//!
//! const VALIDATION: ExceptionClass =
//!   ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));
//!
//! fn validate_input(value: i32) {
//!   if value < 0 {
//!     raise!(VALIDATION, "value must be non-negative");
//!   }
//! }
//!
//! validate_input(-1);
//! ```
//!
//! [`raise!`]: crate::raise!

mod exception;
mod exception_class;
mod exception_kind;
mod location;

pub use self::exception::Exception;
pub use self::exception_class::Ancestry;
pub use self::exception_class::ExceptionClass;
pub use self::exception_kind::ExceptionKind;
pub use self::location::Location;

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises an exception of the specified class.
///
/// The [`Exception`] becomes the panic payload, so code running under
/// [`init::run`] or inside a handler has it routed through the dispatcher
/// with its class, location, and code intact.
///
/// # Examples
///
/// ```should_panic
/// # use faultline::error::ExceptionClass;
/// # use faultline::raise;
/// fn register_name(name: &str) {
///   if name.is_empty() {
///     raise!(ExceptionClass::EXCEPTION, "name cannot be empty");
///   }
/// }
/// # register_name("");
/// ```
///
/// [`init::run`]: crate::init::run
#[macro_export]
macro_rules! raise {
  ($class:path, $format:literal, $($arg:tt)+) => {
    ::std::panic::panic_any($crate::error::Exception::new(
      &$class,
      ::std::format!($format, $($arg)+),
    ))
  };
  ($class:path, $error:expr $(,)?) => {
    ::std::panic::panic_any($crate::error::Exception::new(&$class, $error))
  };
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::any::Any;
  use std::panic;

  use crate::error::Exception;
  use crate::error::ExceptionClass;

  fn caught(payload: Box<dyn Any + Send>) -> Exception {
    match payload.downcast::<Exception>() {
      Ok(exception) => *exception,
      Err(_) => panic!("payload is not an exception"),
    }
  }

  #[test]
  fn test_raise_macro() {
    let payload = panic::catch_unwind(|| raise!(ExceptionClass::RUNTIME_ERROR, "test message"));
    let exception: Exception = caught(payload.unwrap_err());

    assert_eq!(exception.class(), &ExceptionClass::RUNTIME_ERROR);
    assert_eq!(exception.message(), "test message");
    assert_eq!(exception.location().file(), file!());
  }

  #[test]
  fn test_raise_macro_format() {
    let payload = panic::catch_unwind(|| raise!(ExceptionClass::EXCEPTION, "limit {} reached", 8));
    let exception: Exception = caught(payload.unwrap_err());

    assert_eq!(exception.message(), "limit 8 reached");
  }
}
