use std::process;

/// This type represents the status code the current process can return
/// to its parent.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct ExitCode(u8);

impl ExitCode {
  /// The canonical `ExitCode` for successful termination on this platform.
  pub const SUCCESS: ExitCode = ExitCode(libc::EXIT_SUCCESS as u8);

  /// The canonical `ExitCode` for unsuccessful termination on this platform.
  pub const FAILURE: ExitCode = ExitCode(libc::EXIT_FAILURE as u8);

  /// Exit the current process with the given `ExitCode`.
  #[inline]
  pub fn exit_process(self) -> ! {
    process::exit(self.to_i32())
  }

  #[inline]
  pub const fn to_i32(self) -> i32 {
    self.0 as i32
  }
}

impl From<ExitCode> for process::ExitCode {
  #[inline]
  fn from(other: ExitCode) -> Self {
    Self::from(other.0)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::consts;
  use crate::dispatch::ExitCode;

  #[test]
  fn test_codes() {
    assert_eq!(ExitCode::SUCCESS.to_i32(), consts::E_CODE_SUCCESS);
    assert_eq!(ExitCode::FAILURE.to_i32(), consts::E_CODE_FAILURE);
  }
}
