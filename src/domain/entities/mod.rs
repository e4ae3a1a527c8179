mod menu_item;
mod money;
mod order;

pub use menu_item::{MenuCategory, MenuItem};
pub use money::{Money, TaxRate};
pub use order::OrderState;
