//! Panic payload and location helpers.
//!
//! Panic hooks see the panic location but not an owned payload, while
//! `catch_unwind` sees the payload but not the location. The hook installed
//! by [`install_hook`] stashes the location per thread so the catching side
//! can put the two back together.
//!
//! Only threads marked with [`route_panics`] have their panic output
//! dropped; every other panic still reaches the hook that was installed
//! before.

use std::any::Any;
use std::cell::Cell;
use std::cell::RefCell;
use std::panic;
use std::panic::PanicHookInfo;
use tracing::trace;

use crate::error::Exception;
use crate::error::Location;

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

thread_local! {
  static LOCATION: RefCell<Option<Location>> = const { RefCell::new(None) };
  static ROUTING: Cell<bool> = const { Cell::new(false) };
}

/// Wraps the process panic hook with one that records panic locations.
///
/// Panics on a thread marked with [`route_panics`] are displayed by the
/// dispatcher, so the previous hook is skipped for them. Panics on any
/// other thread are passed on to the previous hook unchanged.
pub(crate) fn install_hook() {
  let previous: Hook = panic::take_hook();

  panic::set_hook(Box::new(move |info| {
    if let Some(location) = info.location() {
      trace!(target: "faultline", %location, "panic captured");

      // Ignore TLS teardown, there is nothing left to report to.
      let _ignore: Result<(), _> = LOCATION.try_with(|cell| {
        *cell.borrow_mut() = Some(Location::from(location));
      });
    }

    if !is_routing() {
      previous(info);
    }
  }));
}

/// Marks the current thread as one whose panics reach the dispatcher.
#[inline]
pub(crate) fn route_panics() {
  ROUTING.set(true);
}

/// Returns `true` if panics on the current thread reach the dispatcher.
#[inline]
pub(crate) fn is_routing() -> bool {
  ROUTING.try_with(Cell::get).unwrap_or(false)
}

/// Takes the location recorded by the last panic on this thread.
#[inline]
pub(crate) fn take_location() -> Option<Location> {
  LOCATION.try_with(|cell| cell.borrow_mut().take()).ok().flatten()
}

/// Returns the message carried by a panic payload.
pub(crate) fn payload_message(payload: &(dyn Any + Send)) -> String {
  if let Some(exception) = payload.downcast_ref::<Exception>() {
    exception.message().to_owned()
  } else if let Some(message) = payload.downcast_ref::<&'static str>() {
    (*message).to_owned()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "Box<dyn Any>".to_owned()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::any::Any;

  use crate::error::Exception;
  use crate::error::ExceptionClass;
  use std::thread;

  use crate::utils::is_routing;
  use crate::utils::payload_message;
  use crate::utils::route_panics;
  use crate::utils::take_location;

  #[test]
  fn test_payload_message() {
    let text: Box<dyn Any + Send> = Box::new("static text");
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned text"));
    let other: Box<dyn Any + Send> = Box::new(17_u8);
    let exception: Box<dyn Any + Send> = Box::new(Exception::new(&ExceptionClass::EXCEPTION, "raised"));

    assert_eq!(payload_message(&*text), "static text");
    assert_eq!(payload_message(&*owned), "owned text");
    assert_eq!(payload_message(&*other), "Box<dyn Any>");
    assert_eq!(payload_message(&*exception), "raised");
  }

  #[test]
  fn test_routing_is_per_thread() {
    thread::spawn(|| {
      assert!(!is_routing());
      route_panics();
      assert!(is_routing());
    })
    .join()
    .unwrap();

    let other: bool = thread::spawn(is_routing).join().unwrap();

    assert!(!other, "routing must not leak to other threads");
  }

  #[test]
  fn test_take_location_without_hook() {
    assert!(take_location().is_none());
  }
}
