use bitflags::bitflags;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

bitflags! {
  /// Severity levels of raw runtime error signals.
  ///
  /// A single signal carries one level. A set of levels is used as the
  /// active severity mask: signals whose level does not intersect the mask
  /// are suppressed.
  #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
  pub struct Severity: u32 {
    const ERROR = 1 << 0;
    const WARNING = 1 << 1;
    const PARSE = 1 << 2;
    const NOTICE = 1 << 3;
    const CORE_ERROR = 1 << 4;
    const CORE_WARNING = 1 << 5;
    const COMPILE_ERROR = 1 << 6;
    const COMPILE_WARNING = 1 << 7;
    const USER_ERROR = 1 << 8;
    const USER_WARNING = 1 << 9;
    const USER_NOTICE = 1 << 10;
    const STRICT = 1 << 11;
    const RECOVERABLE_ERROR = 1 << 12;
    const DEPRECATED = 1 << 13;
    const USER_DEPRECATED = 1 << 14;
  }
}

impl Severity {
  /// Levels that abort execution before normal propagation and can only
  /// be reported at teardown.
  pub const FATAL: Self = Self::ERROR
    .union(Self::CORE_ERROR)
    .union(Self::COMPILE_ERROR)
    .union(Self::PARSE);

  /// Returns `true` if this level belongs to the fatal set.
  #[inline]
  pub const fn is_fatal(self) -> bool {
    !self.is_empty() && Self::FATAL.contains(self)
  }

  /// Returns `true` if a signal of this level is reported under `mask`.
  #[inline]
  pub const fn is_reported(self, mask: Self) -> bool {
    self.intersects(mask)
  }

  #[inline]
  pub(crate) fn label(self) -> Option<&'static str> {
    LABELS
      .iter()
      .find(|(level, _)| *level == self)
      .map(|(_, label)| *label)
  }
}

const LABELS: &[(Severity, &str)] = &[
  (Severity::ERROR, "fatal error"),
  (Severity::WARNING, "warning"),
  (Severity::PARSE, "parse error"),
  (Severity::NOTICE, "notice"),
  (Severity::CORE_ERROR, "core error"),
  (Severity::CORE_WARNING, "core warning"),
  (Severity::COMPILE_ERROR, "compile error"),
  (Severity::COMPILE_WARNING, "compile warning"),
  (Severity::USER_ERROR, "user error"),
  (Severity::USER_WARNING, "user warning"),
  (Severity::USER_NOTICE, "user notice"),
  (Severity::STRICT, "strict standards"),
  (Severity::RECOVERABLE_ERROR, "recoverable error"),
  (Severity::DEPRECATED, "deprecated"),
  (Severity::USER_DEPRECATED, "user deprecated"),
];

impl Display for Severity {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    if let Some(label) = self.label() {
      return f.write_str(label);
    }

    bitflags::parser::to_writer(self, f)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
