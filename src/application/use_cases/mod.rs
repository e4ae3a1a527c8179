//! Use case implementations.

mod order_session;

pub use order_session::OrderSession;
