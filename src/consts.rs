use crate::signal::Severity;

// -----------------------------------------------------------------------------
// Exit Codes
// -----------------------------------------------------------------------------

/// Execution success.
pub const E_CODE_SUCCESS: i32 = 0;

/// Unhandled or defaulted exception.
pub const E_CODE_FAILURE: i32 = 1;

// -----------------------------------------------------------------------------
// Signal Conversion
// -----------------------------------------------------------------------------

/// Severities reported unless the configuration says otherwise.
pub const DEFAULT_SEVERITY_MASK: Severity = Severity::all();

// -----------------------------------------------------------------------------
// Display
// -----------------------------------------------------------------------------

/// Prefix of the default rendering of a failure raised by a handler.
pub const HANDLER_FAILURE_LABEL: &str = "Error in exception handler";

// -----------------------------------------------------------------------------
// Memory Allocation
// -----------------------------------------------------------------------------

/// Number of pre-allocated slots in a handler chain.
pub const CAP_HANDLER_CHAIN: usize = 8;
