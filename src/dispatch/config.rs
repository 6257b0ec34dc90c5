use crate::consts;
use crate::signal::Severity;

// -----------------------------------------------------------------------------
// Dispatch Config
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct DispatchConfig {
  // ---------------------------------------------------------------------------
  // Signal Conversion
  // ---------------------------------------------------------------------------
  pub severity_mask: Severity,
  // ---------------------------------------------------------------------------
  // Tracing Subscriber Configuration
  // ---------------------------------------------------------------------------
  pub tracing_source_file: bool,
  pub tracing_source_line: bool,
  pub tracing_source_name: bool,
  pub tracing_thread_info: bool,
  pub tracing_verbose: bool,
  pub tracing_very_verbose: bool,
}

impl DispatchConfig {
  #[inline]
  pub const fn new() -> Self {
    Self {
      severity_mask: consts::DEFAULT_SEVERITY_MASK,
      tracing_source_file: false,
      tracing_source_line: false,
      tracing_source_name: false,
      tracing_thread_info: false,
      tracing_verbose: false,
      tracing_very_verbose: false,
    }
  }

  #[inline]
  pub const fn tracing_filter(&self) -> tracing::Level {
    if self.tracing_very_verbose {
      tracing::Level::TRACE
    } else if self.tracing_verbose {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    }
  }
}

impl Default for DispatchConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::dispatch::DispatchConfig;
  use crate::signal::Severity;

  #[test]
  fn test_defaults() {
    let config: DispatchConfig = DispatchConfig::default();

    assert_eq!(config.severity_mask, Severity::all());
    assert_eq!(config.tracing_filter(), tracing::Level::INFO);
  }

  #[test]
  fn test_tracing_filter() {
    let mut config: DispatchConfig = DispatchConfig::new();

    config.tracing_verbose = true;
    assert_eq!(config.tracing_filter(), tracing::Level::DEBUG);

    config.tracing_very_verbose = true;
    assert_eq!(config.tracing_filter(), tracing::Level::TRACE);
  }
}
