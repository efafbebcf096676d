//! Error types produced while configuring a realm or building leaf values.
//!
//! Composition and cloning never fail; they degrade silently and log at
//! `debug` instead. The errors here cover the edges of the library: loading
//! host capabilities, compiling patterns, and the checked `extend_all` form.

mod conversions;
mod types;

pub use types::SimpleooError;
