//! Application layer with use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful services composed by the use cases.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{OrderPolicy, OrderReceipt};
pub use services::{FlowController, OrderStateHolder};
pub use use_cases::OrderSession;
