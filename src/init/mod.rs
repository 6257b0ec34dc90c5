//! Process-wide dispatcher lifecycle and host entry points.
//!
//! The dispatcher is global state with an explicit lifecycle:
//!
//! 1. **Setup**: handlers are registered on a [`Setup`]
//! 2. **Install**: [`Setup::install`] freezes it into the process-wide slot
//! 3. **Failure handling**: the host calls [`handle_exception`],
//!    [`handle_error`], and [`handle_shutdown`] at the right moments
//!
//! When nothing was installed, the entry points fall back to a dispatcher
//! with no handlers that writes to stderr, so a failure is always shown.
//!
//! [`run`] wires all of the above around a closure: panics become
//! uncaught exceptions and returning normally runs the teardown path.

mod setup;

pub use self::setup::InstallError;
pub use self::setup::Setup;

use std::fmt::Display;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::LazyLock;
use std::sync::OnceLock;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::span;

use crate::dispatch::DispatchConfig;
use crate::dispatch::Dispatcher;
use crate::dispatch::ExitCode;
use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::Location;
use crate::signal::LastSignal;
use crate::signal::RawSignal;
use crate::utils;

pub(crate) static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

static FALLBACK: LazyLock<Dispatcher> = LazyLock::new(|| Setup::new().build());

static LAST_SIGNAL: LazyLock<LastSignal> = LazyLock::new(LastSignal::new);

/// Returns the installed dispatcher, or the stderr fallback.
#[inline]
pub fn dispatcher() -> &'static Dispatcher {
  match DISPATCHER.get() {
    Some(dispatcher) => dispatcher,
    None => LazyLock::force(&FALLBACK),
  }
}

/// Returns `true` if a dispatcher was installed.
#[inline]
pub fn is_installed() -> bool {
  DISPATCHER.get().is_some()
}

// -----------------------------------------------------------------------------
// Host Entry Points
// -----------------------------------------------------------------------------

/// Handles an uncaught exception and terminates the process.
pub fn handle_exception(exception: Exception) -> ! {
  dispatcher().handle_exception(exception)
}

/// Handles a runtime error.
///
/// Returns normally only if the signal is suppressed by the active mask. The
/// signal is not recorded for teardown: a suppressed signal leaves the exit
/// status alone, whatever its level.
pub fn handle_error(signal: RawSignal) {
  dispatcher().handle_error(signal)
}

/// Records a signal for teardown without converting it.
///
/// Use this for fatal conditions that abort before they can be routed. This
/// is the only way a signal reaches the teardown path.
#[inline]
pub fn capture_signal(signal: RawSignal) {
  LAST_SIGNAL.capture(signal);
}

/// Returns a copy of the last recorded signal.
#[inline]
pub fn last_signal() -> Option<RawSignal> {
  LAST_SIGNAL.peek()
}

/// Runs the teardown path with the last recorded signal.
///
/// Only the first call per process has any effect. Terminates the process
/// if the last signal was fatal.
pub fn handle_shutdown() {
  dispatcher().handle_shutdown(LAST_SIGNAL.take())
}

// -----------------------------------------------------------------------------
// Run
// -----------------------------------------------------------------------------

/// Runs `f` with a default [`Setup`] installed.
///
/// This is the same as calling `run_with(Setup::new(), f)`.
#[inline]
#[track_caller]
pub fn run<F>(f: F) -> !
where
  F: FnOnce(),
{
  run_with(Setup::new(), f)
}

/// Installs `setup` and runs `f` under the dispatcher.
///
/// - A panic escaping `f` is handled as an uncaught exception.
/// - Returning normally runs the teardown path, then exits with
///   [`ExitCode::SUCCESS`].
///
/// If a dispatcher is already installed, the failure to install is itself
/// reported through it.
#[track_caller]
pub fn run_with<F>(setup: Setup, f: F) -> !
where
  F: FnOnce(),
{
  let caller: Location = Location::caller();

  if let Err(error) = init_tracing_subscriber(&setup.config) {
    eprintln!("failed to set tracing subscriber:");
    eprintln!("    {}", error.message());
  }

  let span: Span = span!(target: "faultline", Level::DEBUG, "init::run");

  let dispatcher: &'static Dispatcher = match setup.install() {
    Ok(dispatcher) => dispatcher,
    Err(error) => dispatcher().handle_exception(failure(error).with_location(caller)),
  };

  utils::install_hook();
  utils::route_panics();

  debug!(target: "faultline", parent: &span, "running");

  if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
    let location: Location = utils::take_location().unwrap_or(caller);
    dispatcher.handle_exception(Exception::from_panic(payload, location));
  }

  debug!(target: "faultline", parent: &span, "teardown");

  handle_shutdown();

  debug!(
    target: "faultline",
    parent: &span,
    status = ExitCode::SUCCESS.to_i32(),
    "exiting",
  );

  ExitCode::SUCCESS.exit_process()
}

/// Builds the global tracing subscriber configuration.
#[cfg(feature = "tracing")]
fn init_tracing_subscriber(config: &DispatchConfig) -> Result<(), Exception> {
  use tracing_subscriber::FmtSubscriber;
  use tracing_subscriber::fmt::format;
  use tracing_subscriber::util::SubscriberInitExt;

  FmtSubscriber::builder()
    .event_format(format().compact())
    .log_internal_errors(true)
    .with_ansi(true)
    .with_file(config.tracing_source_file)
    .with_level(true)
    .with_line_number(config.tracing_source_line)
    .with_max_level(config.tracing_filter())
    .with_target(config.tracing_source_name)
    .with_thread_ids(config.tracing_thread_info)
    .with_thread_names(config.tracing_thread_info)
    .with_writer(std::io::stderr)
    .finish()
    .try_init()
    .map_err(failure)
}

#[cfg(not(feature = "tracing"))]
fn init_tracing_subscriber(_config: &DispatchConfig) -> Result<(), Exception> {
  Ok(())
}

/// Returns a generic exception with the given error message.
#[cold]
#[track_caller]
fn failure<E>(error: E) -> Exception
where
  E: Display,
{
  Exception::new(&ExceptionClass::EXCEPTION, error)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(all(test, not(loom)))]
mod tests {
  use crate::dispatch::CaptureSink;
  use crate::dispatch::Dispatcher;
  use crate::handler::HandlerEntry;
  use crate::init;
  use crate::init::InstallError;
  use crate::init::Setup;
  use crate::signal::RawSignal;
  use crate::signal::Severity;

  #[test]
  fn test_build_registration_order() {
    let dispatcher: Dispatcher = Setup::new()
      .priority(HandlerEntry::any(|| "h1"))
      .fallback(HandlerEntry::any(|| "f1"))
      .priority(HandlerEntry::any(|| "h2"))
      .build();

    let order: Vec<u32> = dispatcher
      .chain()
      .iter()
      .map(|entry| entry.site().line())
      .collect();

    assert_eq!(order.len(), 3);
    assert!(order[0] > order[1], "latest priority handler must run first");
    assert!(order[2] > order[1], "fallback handler must run last");
  }

  // The only test in this crate that touches the process-wide slots.
  #[test]
  fn test_global_lifecycle() {
    let sink: CaptureSink = CaptureSink::new();

    let installed: &'static Dispatcher = Setup::new()
      .sink(sink.clone())
      .severity_mask(Severity::all().difference(Severity::NOTICE))
      .fallback(HandlerEntry::any(|| "handled"))
      .install()
      .expect("first install");

    assert!(init::is_installed());
    assert!(std::ptr::eq(installed, init::dispatcher()));

    let again: Result<&'static Dispatcher, InstallError> = Setup::new().install();
    assert!(matches!(again, Err(InstallError::AlreadyInstalled)));

    // Suppressed signals return and are not recorded for teardown.
    init::handle_error(RawSignal::new(Severity::NOTICE, "undefined index", "a.rs", 1));
    assert!(init::last_signal().is_none());

    init::capture_signal(RawSignal::new(Severity::NOTICE, "undefined index", "a.rs", 1));
    assert_eq!(
      init::last_signal().map(|signal| signal.level()),
      Some(Severity::NOTICE)
    );

    // Non-fatal signals are ignored at teardown.
    init::capture_signal(RawSignal::new(Severity::WARNING, "careful", "a.rs", 2));
    init::handle_shutdown();

    assert!(init::last_signal().is_none());
    assert!(sink.writes().is_empty());

    // Teardown runs once.
    init::capture_signal(RawSignal::new(Severity::PARSE, "unexpected eof", "a.rs", 3));
    init::handle_shutdown();

    assert!(sink.writes().is_empty());
  }
}
