use crate::consts;
use crate::error::Exception;
use crate::error::ExceptionKind;

/// Renders `exception` when no handler produced a response.
///
/// Formats as `{message} in {file}:{line}`, prefixed with the handler
/// failure label when the exception was raised by a handler.
pub fn default_format(exception: &Exception) -> String {
  match exception.kind() {
    ExceptionKind::HandlerFailure => format!("{}: {exception}", consts::HANDLER_FAILURE_LABEL),
    _ => exception.to_string(),
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::dispatch::default_format;
  use crate::error::Exception;
  use crate::error::ExceptionClass;
  use crate::error::Location;

  fn exception() -> Exception {
    Exception::new(&ExceptionClass::EXCEPTION, "boom").with_location(Location::new("a.go", 10))
  }

  #[test]
  fn test_bare() {
    assert_eq!(default_format(&exception()), "boom in a.go:10");
  }

  #[test]
  fn test_handler_failure_label() {
    assert_eq!(
      default_format(&exception().into_handler_failure()),
      "Error in exception handler: boom in a.go:10"
    );
  }
}
