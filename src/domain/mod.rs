//! Domain layer with core ordering entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Screen flow definitions.
pub mod screen;

pub use entities::{MenuCategory, MenuItem, Money, OrderState, TaxRate};
pub use errors::OrderError;
pub use ports::CatalogPort;
pub use screen::{NavEvent, ScreenId, SideEffect, Transition};
