use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tracing::debug;

use crate::dispatch::DispatchConfig;
use crate::dispatch::Dispatcher;
use crate::dispatch::Sink;
use crate::dispatch::StderrSink;
use crate::handler::HandlerChain;
use crate::handler::HandlerEntry;
use crate::init::DISPATCHER;
use crate::signal::Severity;

// -----------------------------------------------------------------------------
// Install Error
// -----------------------------------------------------------------------------

/// Errors returned from [`Setup::install`].
#[derive(Debug)]
#[non_exhaustive]
pub enum InstallError {
  /// A dispatcher was already installed for this process.
  ///
  /// The installed dispatcher is frozen; it cannot be replaced or extended.
  AlreadyInstalled,
}

impl Display for InstallError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Self::AlreadyInstalled => f.write_str("dispatcher already installed"),
    }
  }
}

impl Error for InstallError {}

// -----------------------------------------------------------------------------
// Setup
// -----------------------------------------------------------------------------

/// Setup phase of the process-wide dispatcher.
///
/// Handlers can only be registered here. [`install`] freezes the result;
/// from then on the chain is read-only.
///
/// # Examples
///
/// ```
/// use faultline::error::ExceptionClass;
/// use faultline::handler::HandlerEntry;
/// use faultline::init::Setup;
///
/// const VALIDATION: ExceptionClass =
///   ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));
///
/// let dispatcher = Setup::new()
///   .fallback(HandlerEntry::on(&VALIDATION, |_| "validation failed"))
///   .priority(HandlerEntry::all(|exception| {
///     eprintln!("reporting {exception}");
///   }))
///   .build();
///
/// assert_eq!(dispatcher.chain().len(), 2);
/// ```
///
/// [`install`]: Setup::install
pub struct Setup {
  chain: HandlerChain,
  sink: Box<dyn Sink>,
  pub(crate) config: DispatchConfig,
}

impl Setup {
  /// Creates a new `Setup` with no handlers, writing to stderr.
  #[inline]
  pub fn new() -> Self {
    Self {
      chain: HandlerChain::new(),
      sink: Box::new(StderrSink),
      config: DispatchConfig::new(),
    }
  }

  /// Replaces the configuration.
  #[inline]
  pub fn config(mut self, config: DispatchConfig) -> Self {
    self.config = config;
    self
  }

  /// Replaces the active severity mask.
  #[inline]
  pub fn severity_mask(mut self, mask: Severity) -> Self {
    self.config.severity_mask = mask;
    self
  }

  /// Replaces the display sink.
  #[inline]
  pub fn sink<S>(mut self, sink: S) -> Self
  where
    S: Sink + 'static,
  {
    self.sink = Box::new(sink);
    self
  }

  /// Registers a handler ahead of every handler registered so far.
  #[inline]
  pub fn priority(mut self, entry: HandlerEntry) -> Self {
    self.chain.register_priority(entry);
    self
  }

  /// Registers a handler behind every handler registered so far.
  #[inline]
  pub fn fallback(mut self, entry: HandlerEntry) -> Self {
    self.chain.register_fallback(entry);
    self
  }

  /// Freezes the setup into a standalone dispatcher.
  pub fn build(self) -> Dispatcher {
    Dispatcher::from_parts(self.chain, self.sink, self.config.severity_mask)
  }

  /// Freezes the setup into the process-wide dispatcher.
  ///
  /// # Errors
  ///
  /// Returns [`InstallError::AlreadyInstalled`] if a dispatcher is already
  /// installed; `self` is dropped in that case.
  pub fn install(self) -> Result<&'static Dispatcher, InstallError> {
    let mut fresh: bool = false;

    let dispatcher: &'static Dispatcher = DISPATCHER.get_or_init(|| {
      fresh = true;
      self.build()
    });

    if !fresh {
      return Err(InstallError::AlreadyInstalled);
    }

    debug!(
      target: "faultline",
      handlers = dispatcher.chain().len(),
      mask = %dispatcher.severity_mask(),
      "dispatcher installed",
    );

    Ok(dispatcher)
  }
}

impl Debug for Setup {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Setup")
      .field("chain", &self.chain)
      .finish_non_exhaustive()
  }
}

impl Default for Setup {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
