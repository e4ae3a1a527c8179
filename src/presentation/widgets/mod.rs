mod footer_bar;
mod header_bar;
mod menu_list;
mod status_bar;

pub use footer_bar::FooterBar;
pub use header_bar::HeaderBar;
pub use menu_list::{MenuList, MenuListState};
pub use status_bar::{StatusBar, StatusLevel};
