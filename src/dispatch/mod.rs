//! The dispatcher and its collaborators.
//!
//! A [`Dispatcher`] owns a frozen [`HandlerChain`], a [`Sink`] for display,
//! and the active severity mask. Every path through it ends the same way:
//! the response (or [`default_format`] of the exception) is written to the
//! sink surrounded by blank lines, and the process exits with
//! [`ExitCode::FAILURE`].
//!
//! [`HandlerChain`]: crate::handler::HandlerChain

mod config;
mod dispatcher;
mod exit;
mod format;
mod sink;

pub use self::config::DispatchConfig;
pub use self::dispatcher::Dispatcher;
pub use self::exit::ExitCode;
pub use self::format::default_format;
pub use self::sink::CaptureSink;
pub use self::sink::Sink;
pub use self::sink::StderrSink;
pub use self::sink::StdoutSink;
