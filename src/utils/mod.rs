//! Utility types and functions used throughout the crate.
//!
//! # Contents
//!
//! - [`measure_fn`]: Timing for tracing events
//! - [`install_hook`], [`take_location`]: Panic location capture
//! - [`route_panics`], [`is_routing`]: Panic output ownership per thread
//! - [`payload_message`]: Panic payload text

mod measure;
mod panic;

pub(crate) use self::measure::measure_fn;
pub(crate) use self::panic::install_hook;
pub(crate) use self::panic::is_routing;
pub(crate) use self::panic::payload_message;
pub(crate) use self::panic::route_panics;
pub(crate) use self::panic::take_location;
