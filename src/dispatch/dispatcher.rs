use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::span;
use tracing::warn;

use crate::dispatch::ExitCode;
use crate::dispatch::Sink;
use crate::dispatch::StderrSink;
use crate::dispatch::default_format;
use crate::error::Exception;
use crate::handler::HandlerChain;
use crate::signal;
use crate::signal::Conversion;
use crate::signal::RawSignal;
use crate::signal::Severity;
use crate::utils;
use crate::utils::measure_fn;

/// Routes exceptions through a handler chain to a display sink.
///
/// The `handle_*` methods are the process entry points and never return
/// once an exception is produced: the rendered text is written to the sink
/// and the process exits with [`ExitCode::FAILURE`]. The matching
/// `route_*` methods do everything except exiting and return the exit code
/// instead.
pub struct Dispatcher {
  chain: HandlerChain,
  sink: Box<dyn Sink>,
  mask: Severity,
  teardown: AtomicBool,
}

impl Dispatcher {
  /// Creates a new `Dispatcher`.
  #[inline]
  pub fn new<S>(chain: HandlerChain, sink: S, mask: Severity) -> Self
  where
    S: Sink + 'static,
  {
    Self::from_parts(chain, Box::new(sink), mask)
  }

  pub(crate) fn from_parts(chain: HandlerChain, sink: Box<dyn Sink>, mask: Severity) -> Self {
    Self {
      chain,
      sink,
      mask,
      teardown: AtomicBool::new(false),
    }
  }

  /// Returns the handler chain.
  #[inline]
  pub const fn chain(&self) -> &HandlerChain {
    &self.chain
  }

  /// Returns the active severity mask.
  #[inline]
  pub const fn severity_mask(&self) -> Severity {
    self.mask
  }

  // ---------------------------------------------------------------------------
  // Process Entry Points
  // ---------------------------------------------------------------------------

  /// Displays `exception` and terminates the process with a failure status.
  pub fn handle_exception(&self, exception: Exception) -> ! {
    self.route_exception(exception).exit_process()
  }

  /// Converts a runtime error and handles it, unless it is suppressed.
  ///
  /// Returns normally only for suppressed signals.
  pub fn handle_error(&self, signal: RawSignal) {
    if let Some(ecode) = self.route_error(signal) {
      ecode.exit_process();
    }
  }

  /// Promotes the last captured signal at teardown and handles it.
  ///
  /// Only the first call has any effect. Returns normally unless the signal
  /// was fatal.
  pub fn handle_shutdown(&self, last: Option<RawSignal>) {
    if let Some(ecode) = self.route_shutdown(last) {
      ecode.exit_process();
    }
  }

  // ---------------------------------------------------------------------------
  // Routing
  // ---------------------------------------------------------------------------

  /// Produces the response for `exception` without displaying it.
  ///
  /// This is the chain's response, or the default rendering when every
  /// eligible handler declined.
  pub fn respond(&self, exception: &Exception) -> String {
    let (response, elapsed): (Option<String>, Duration) =
      measure_fn(|| self.chain.dispatch(exception));

    match response {
      Some(response) => {
        debug!(target: "faultline", elapsed = ?elapsed, "handled");
        response
      }
      None => {
        debug!(target: "faultline", elapsed = ?elapsed, "defaulted");
        default_format(exception)
      }
    }
  }

  /// Responds to `exception` and writes the response to the sink.
  ///
  /// Always returns [`ExitCode::FAILURE`].
  pub fn route_exception(&self, exception: Exception) -> ExitCode {
    let span: Span = span!(
      target: "faultline",
      Level::DEBUG,
      "dispatch",
      kind = %exception.kind(),
      class = %exception.class(),
    );

    let _entered: span::Entered<'_> = span.enter();

    let response: String = self.respond(&exception);

    self.display(&response);

    debug!(
      target: "faultline",
      status = ExitCode::FAILURE.to_i32(),
      "uncaught exception",
    );

    ExitCode::FAILURE
  }

  /// Converts `signal` and routes it, unless it is suppressed.
  pub fn route_error(&self, signal: RawSignal) -> Option<ExitCode> {
    match signal::convert(signal, self.mask) {
      Conversion::Converted(exception) => Some(self.route_exception(exception)),
      Conversion::Suppressed => None,
    }
  }

  /// Promotes `last` at teardown and routes it, if it is fatal.
  ///
  /// Calls after the first return `None` without looking at `last`.
  pub fn route_shutdown(&self, last: Option<RawSignal>) -> Option<ExitCode> {
    if self.teardown.swap(true, Ordering::SeqCst) {
      debug!(target: "faultline", "teardown already ran");
      return None;
    }

    signal::promote(last).map(|exception| self.route_exception(exception))
  }

  /// Writes `response` to the sink, or to stderr if the sink panics.
  fn display(&self, response: &str) {
    let text: String = format!("\n{response}\n\n");

    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| self.sink.write(&text))) {
      let _ignore: Option<_> = utils::take_location();

      warn!(
        target: "faultline",
        failure = %utils::payload_message(&*payload),
        "sink failed",
      );

      StderrSink.write(&text);
    }
  }
}

impl Debug for Dispatcher {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Dispatcher")
      .field("chain", &self.chain)
      .field("mask", &self.mask)
      .field("teardown", &self.teardown)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
