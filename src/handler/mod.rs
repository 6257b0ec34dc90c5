//! Exception handlers and the ordered chain that dispatches to them.
//!
//! # Registration
//!
//! Handlers declare what they accept when they are created:
//!
//! - [`HandlerEntry::any`]: no arguments, sees everything
//! - [`HandlerEntry::all`]: receives the exception, sees everything
//! - [`HandlerEntry::on`]: receives exceptions that are a given class
//! - [`HandlerEntry::one_of`]: receives exceptions that are any of several classes
//!
//! # Dispatch
//!
//! [`HandlerChain::dispatch`] walks the chain front to back and stops at the
//! first eligible handler that produces a response. Handler failures never
//! escape dispatch; they become that handler's response.

mod chain;
mod entry;
mod filter;
mod outcome;

pub use self::chain::HandlerChain;
pub use self::entry::HandlerEntry;
pub use self::filter::Filter;
pub use self::outcome::HandlerResult;
pub use self::outcome::Outcome;
