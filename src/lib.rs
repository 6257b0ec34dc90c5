//! Faultline - process-wide fault routing for Rust programs.
//!
//! Faultline unifies three failure signals into one [`Exception`] shape and
//! routes it through an ordered, class-filtered chain of handlers:
//!
//! - recoverable runtime errors, reported under a severity mask
//! - uncaught exceptions (panics, usually raised with [`raise!`])
//! - fatal conditions that are only discoverable at process teardown
//!
//! The first handler to produce a response wins; otherwise a default
//! rendering is used. The text is written to a display sink and the process
//! exits with a failure status.
//!
//! # Quick Start
//!
//! ```no_run
//! use faultline::error::ExceptionClass;
//! use faultline::handler::HandlerEntry;
//! use faultline::init::{self, Setup};
//! use faultline::raise;
//!
//! const VALIDATION: ExceptionClass =
//!   ExceptionClass::new("ValidationError", Some(&ExceptionClass::EXCEPTION));
//!
//! let setup = Setup::new().fallback(HandlerEntry::on(&VALIDATION, |exception| {
//!   format!("validation failed: {}", exception.message())
//! }));
//!
//! init::run_with(setup, || {
//!   raise!(VALIDATION, "email is required");
//! });
//! ```
//!
//! # Core Modules
//!
//! - [`init`]: Process-wide lifecycle and host entry points
//! - [`dispatch`]: Dispatcher, default formatting, display sinks
//! - [`handler`]: Handler entries and the handler chain
//! - [`signal`]: Raw signals, severity mask, conversion, and promotion
//! - [`error`]: Exception model
//! - [`consts`]: Defaults
//!
//! [`Exception`]: crate::error::Exception

mod loom;
mod utils;

pub mod consts;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod init;
pub mod signal;
