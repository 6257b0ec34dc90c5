#![cfg(loom)]

mod last_signal;
