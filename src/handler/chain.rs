use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::consts;
use crate::dispatch;
use crate::error::Exception;
use crate::handler::HandlerEntry;

/// Ordered registry of exception handlers.
///
/// Order is the dispatch order. Priority registrations go to the front, so
/// the most recent one runs first; fallback registrations go to the back
/// and run in the order they were added, after every priority handler.
/// Entries are never merged, deduplicated, or removed.
#[derive(Debug)]
pub struct HandlerChain {
  entries: VecDeque<HandlerEntry>,
}

impl HandlerChain {
  /// Creates a new, empty `HandlerChain`.
  #[inline]
  pub fn new() -> Self {
    Self {
      entries: VecDeque::with_capacity(consts::CAP_HANDLER_CHAIN),
    }
  }

  /// Places `entry` at the front of the chain.
  #[inline]
  pub fn register_priority(&mut self, entry: HandlerEntry) {
    self.entries.push_front(entry);
  }

  /// Places `entry` at the back of the chain.
  #[inline]
  pub fn register_fallback(&mut self, entry: HandlerEntry) {
    self.entries.push_back(entry);
  }

  /// Returns the number of registered handlers.
  #[inline]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` if no handler is registered.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns an iterator over the handlers in dispatch order.
  #[inline]
  pub fn iter(&self) -> Iter<'_, HandlerEntry> {
    self.entries.iter()
  }

  /// Runs eligible handlers in order until one produces a response.
  ///
  /// Ineligible handlers are skipped. A handler that fails (returns `Err`
  /// or panics) produces the default rendering of its own failure, tagged
  /// as a handler failure, and that rendering is the response.
  ///
  /// Returns `None` if every eligible handler declined.
  pub fn dispatch(&self, exception: &Exception) -> Option<String> {
    for (index, entry) in self.entries.iter().enumerate() {
      if !entry.handles(exception) {
        trace!(target: "faultline", index, filter = ?entry.filter(), "handler skipped");
        continue;
      }

      let response: Option<String> = match entry.invoke(exception) {
        Ok(response) => response,
        Err(failure) => {
          let failure: Exception = failure.into_handler_failure();

          warn!(
            target: "faultline",
            index,
            site = %entry.site(),
            failure = %failure,
            "handler failed",
          );

          Some(dispatch::default_format(&failure))
        }
      };

      if response.is_some() {
        debug!(target: "faultline", index, site = %entry.site(), "handler responded");
        return response;
      }
    }

    None
  }
}

impl Default for HandlerChain {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<'a> IntoIterator for &'a HandlerChain {
  type Item = &'a HandlerEntry;
  type IntoIter = Iter<'a, HandlerEntry>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use parking_lot::Mutex;
  use std::sync::atomic::AtomicUsize;
  use std::sync::atomic::Ordering;
  use triomphe::Arc;

  use crate::error::Exception;
  use crate::error::ExceptionClass;
  use crate::error::Location;
  use crate::handler::HandlerChain;
  use crate::handler::HandlerEntry;

  const VALIDATION: ExceptionClass =
    ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));

  const NETWORK: ExceptionClass =
    ExceptionClass::new("NetworkError", Some(&ExceptionClass::EXCEPTION));

  fn exception(class: &'static ExceptionClass) -> Exception {
    Exception::new(class, "boom").with_location(Location::new("a.go", 10))
  }

  fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> HandlerEntry {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::clone(log);
    HandlerEntry::any(move || log.lock().push(name))
  }

  fn counter(count: &Arc<AtomicUsize>) -> HandlerEntry {
    let count: Arc<AtomicUsize> = Arc::clone(count);

    HandlerEntry::any(move || {
      count.fetch_add(1, Ordering::SeqCst);
      "counted"
    })
  }

  #[test]
  fn test_empty() {
    let chain: HandlerChain = HandlerChain::new();

    assert!(chain.is_empty());
    assert_eq!(chain.dispatch(&exception(&VALIDATION)), None);
  }

  #[test]
  fn test_dispatch_order() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let mut chain: HandlerChain = HandlerChain::new();

    chain.register_fallback(recorder(&log, "f1"));
    chain.register_priority(recorder(&log, "h1"));
    chain.register_priority(recorder(&log, "h2"));
    chain.register_fallback(recorder(&log, "f2"));
    chain.register_priority(recorder(&log, "h3"));

    assert_eq!(chain.len(), 5);
    assert_eq!(chain.dispatch(&exception(&VALIDATION)), None);
    assert_eq!(*log.lock(), ["h3", "h2", "h1", "f1", "f2"]);
  }

  #[test]
  fn test_duplicates_all_run() {
    let count: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut chain: HandlerChain = HandlerChain::new();

    for _ in 0..3 {
      let count: Arc<AtomicUsize> = Arc::clone(&count);

      chain.register_fallback(HandlerEntry::any(move || {
        count.fetch_add(1, Ordering::SeqCst);
      }));
    }

    assert_eq!(chain.dispatch(&exception(&VALIDATION)), None);
    assert_eq!(count.load(Ordering::SeqCst), 3);
  }

  #[test]
  fn test_short_circuit() {
    let later: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut chain: HandlerChain = HandlerChain::new();

    chain.register_fallback(HandlerEntry::all(|_| ()));
    chain.register_fallback(HandlerEntry::all(|_| "first"));
    chain.register_fallback(counter(&later));
    chain.register_fallback(counter(&later));

    assert_eq!(chain.dispatch(&exception(&VALIDATION)).as_deref(), Some("first"));
    assert_eq!(later.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn test_type_filter() {
    let mut chain: HandlerChain = HandlerChain::new();

    chain.register_fallback(HandlerEntry::on(&VALIDATION, |_| "validation failed"));

    assert_eq!(
      chain.dispatch(&exception(&VALIDATION)).as_deref(),
      Some("validation failed")
    );

    assert_eq!(chain.dispatch(&exception(&NETWORK)), None);
  }

  #[test]
  fn test_skipped_handler_has_no_side_effects() {
    let count: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut chain: HandlerChain = HandlerChain::new();

    let seen: Arc<AtomicUsize> = Arc::clone(&count);

    chain.register_priority(HandlerEntry::on(&NETWORK, move |_| {
      seen.fetch_add(1, Ordering::SeqCst);
      "network"
    }));

    chain.register_fallback(HandlerEntry::any(|| "catch-all"));

    assert_eq!(chain.dispatch(&exception(&VALIDATION)).as_deref(), Some("catch-all"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn test_failing_handler_responds_and_stops() {
    let later: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut chain: HandlerChain = HandlerChain::new();

    chain.register_fallback(HandlerEntry::all(|_| -> Result<String, Exception> {
      Err(Exception::new(&ExceptionClass::EXCEPTION, "db down").with_location(Location::new("h.rs", 3)))
    }));

    chain.register_fallback(counter(&later));

    assert_eq!(
      chain.dispatch(&exception(&VALIDATION)).as_deref(),
      Some("Error in exception handler: db down in h.rs:3")
    );

    assert_eq!(later.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn test_panicking_handler_responds() {
    let mut chain: HandlerChain = HandlerChain::new();

    chain.register_fallback(HandlerEntry::any(|| -> &'static str { panic!("kaboom") }));

    let response: String = chain
      .dispatch(&exception(&VALIDATION))
      .expect("failure should respond");

    assert!(response.starts_with("Error in exception handler: kaboom in "));
    assert!(response.contains(file!()));
  }
}
