//! Raw runtime error signals and their conversion into exceptions.
//!
//! Two paths turn a raw signal into an [`Exception`]:
//!
//! - [`convert`]: for recoverable errors, subject to the active severity
//!   mask. Suppressed signals produce nothing.
//! - [`promote`]: for the last captured signal at teardown, and only if its
//!   level is in the [`FATAL`] set.
//!
//! Both return values rather than unwinding; the caller decides whether to
//! route the result into the dispatcher.
//!
//! [`Exception`]: crate::error::Exception
//! [`FATAL`]: Severity::FATAL

mod convert;
mod last_signal;
mod promote;
mod raw_signal;
mod severity;

pub use self::convert::Conversion;
pub use self::convert::convert;
pub use self::last_signal::LastSignal;
pub use self::promote::promote;
pub use self::raw_signal::RawSignal;
pub use self::severity::Severity;
