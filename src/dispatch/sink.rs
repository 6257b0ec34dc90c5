use parking_lot::Mutex;
use std::io;
use std::io::Write;
use triomphe::Arc;

/// The display collaborator: where rendered exceptions are written.
///
/// Sinks are shared by the frozen dispatcher and must not fail; a sink that
/// cannot write drops the text.
pub trait Sink: Send + Sync {
  fn write(&self, text: &str);
}

impl<F> Sink for F
where
  F: Fn(&str) + Send + Sync,
{
  #[inline]
  fn write(&self, text: &str) {
    self(text)
  }
}

// -----------------------------------------------------------------------------
// Stderr
// -----------------------------------------------------------------------------

/// Writes to the standard error stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
  fn write(&self, text: &str) {
    let mut stderr: io::StderrLock<'static> = io::stderr().lock();
    let _ignore: io::Result<()> = stderr.write_all(text.as_bytes());
    let _ignore: io::Result<()> = stderr.flush();
  }
}

// -----------------------------------------------------------------------------
// Stdout
// -----------------------------------------------------------------------------

/// Writes to the standard output stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
  fn write(&self, text: &str) {
    let mut stdout: io::StdoutLock<'static> = io::stdout().lock();
    let _ignore: io::Result<()> = stdout.write_all(text.as_bytes());
    let _ignore: io::Result<()> = stdout.flush();
  }
}

// -----------------------------------------------------------------------------
// Capture
// -----------------------------------------------------------------------------

/// Keeps every write in memory.
///
/// Clones share the same buffer, so one clone can be handed to the
/// dispatcher while another is inspected.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
  inner: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
  /// Creates a new, empty `CaptureSink`.
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of every write so far, oldest first.
  #[inline]
  pub fn writes(&self) -> Vec<String> {
    self.inner.lock().clone()
  }

  /// Returns the most recent write.
  #[inline]
  pub fn last(&self) -> Option<String> {
    self.inner.lock().last().cloned()
  }
}

impl Sink for CaptureSink {
  #[inline]
  fn write(&self, text: &str) {
    self.inner.lock().push(text.to_owned());
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
