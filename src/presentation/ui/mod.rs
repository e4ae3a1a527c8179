//! UI screens.

mod app;
mod checkout_screen;
mod menu_screen;
mod start_screen;

pub use app::App;
pub use checkout_screen::CheckoutScreen;
pub use menu_screen::MenuScreen;
pub use start_screen::StartScreen;

use crate::domain::entities::MenuItem;

/// What a screen asks the app to do after a key action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Nothing to do beyond a redraw.
    None,
    /// The start order button was pressed.
    StartOrder,
    /// The highlighted menu item was chosen.
    SelectionChanged(MenuItem),
    /// Next on a menu, or submit on checkout.
    Next,
    /// The cancel button was pressed.
    Cancel,
}
