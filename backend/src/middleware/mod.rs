//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! trace correlation and panic containment.

pub mod catch_panic;
pub mod trace;

pub use catch_panic::CatchPanic;
pub use trace::Trace;
