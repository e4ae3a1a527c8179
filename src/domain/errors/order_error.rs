//! Ordering error types.

use thiserror::Error;

use crate::domain::entities::MenuCategory;
use crate::domain::screen::{NavEvent, ScreenId};

/// Rejected order mutation or navigation.
///
/// A rejected request never changes the order or the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum OrderError {
    #[error("{item} is not on the {category} menu")]
    InvalidSelection {
        item: String,
        category: MenuCategory,
    },

    #[error("no selection made on {screen}")]
    IncompleteOrder { screen: ScreenId },

    #[error("nothing to select on {screen}")]
    SelectionUnavailable { screen: ScreenId },

    #[error("cannot {event} from {from}")]
    UnsupportedTransition { from: ScreenId, event: NavEvent },
}

impl OrderError {
    /// Creates invalid selection error.
    #[must_use]
    pub fn invalid_selection(item: impl Into<String>, category: MenuCategory) -> Self {
        Self::InvalidSelection {
            item: item.into(),
            category,
        }
    }

    /// Returns whether the error only means the user has not chosen yet.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteOrder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OrderError::invalid_selection("Pizza", MenuCategory::SideDish);
        assert_eq!(err.to_string(), "Pizza is not on the Side Dish menu");

        let err = OrderError::UnsupportedTransition {
            from: ScreenId::Checkout,
            event: NavEvent::StartOrder,
        };
        assert_eq!(err.to_string(), "cannot start order from Checkout");
    }

    #[test]
    fn test_is_incomplete() {
        assert!(
            OrderError::IncompleteOrder {
                screen: ScreenId::EntreeMenu
            }
            .is_incomplete()
        );
        assert!(!OrderError::invalid_selection("x", MenuCategory::Entree).is_incomplete());
    }
}
