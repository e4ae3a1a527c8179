//! Data transfer objects for the application layer.

mod order_dto;

pub use order_dto::{OrderPolicy, OrderReceipt};
