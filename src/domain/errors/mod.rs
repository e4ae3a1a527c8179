//! Domain error types.

mod order_error;

pub use order_error::OrderError;
