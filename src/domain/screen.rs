//! Screens of the ordering flow and the transitions between them.

use super::entities::MenuCategory;

/// Navigable destination in the ordering flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Landing screen offering to start an order.
    #[default]
    Start,
    /// Entree selection.
    EntreeMenu,
    /// Side dish selection.
    SideDishMenu,
    /// Accompaniment selection.
    AccompanimentMenu,
    /// Order summary and submission.
    Checkout,
}

/// Navigation event raised by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEvent {
    /// "Start order" on the start screen.
    StartOrder,
    /// "Next" on a menu screen, "Submit" on checkout.
    Next,
    /// "Cancel" on any screen.
    Cancel,
}

/// Effect that must accompany a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Discard the in-progress order.
    ResetOrder,
    /// Hand off the in-progress order, then discard it.
    SubmitOrder,
}

/// Resolved entry of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Screen the event was raised on.
    pub from: ScreenId,
    /// Screen to show next.
    pub to: ScreenId,
    /// Effect to apply along with the move.
    pub effect: Option<SideEffect>,
}

impl ScreenId {
    /// All screens in forward order.
    pub const ALL: [Self; 5] = [
        Self::Start,
        Self::EntreeMenu,
        Self::SideDishMenu,
        Self::AccompanimentMenu,
        Self::Checkout,
    ];

    /// Returns the app bar title for the screen.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Start => "Lunch Tray",
            Self::EntreeMenu => "Choose Entree",
            Self::SideDishMenu => "Choose Side Dish",
            Self::AccompanimentMenu => "Choose Accompaniment",
            Self::Checkout => "Order Checkout",
        }
    }

    /// Returns the menu category chosen on this screen, if any.
    #[must_use]
    pub const fn menu_category(self) -> Option<MenuCategory> {
        match self {
            Self::EntreeMenu => Some(MenuCategory::Entree),
            Self::SideDishMenu => Some(MenuCategory::SideDish),
            Self::AccompanimentMenu => Some(MenuCategory::Accompaniment),
            Self::Start | Self::Checkout => None,
        }
    }

    /// Returns the 1-based step number of a menu or checkout screen.
    #[must_use]
    pub const fn step(self) -> Option<u8> {
        match self {
            Self::Start => None,
            Self::EntreeMenu => Some(1),
            Self::SideDishMenu => Some(2),
            Self::AccompanimentMenu => Some(3),
            Self::Checkout => Some(4),
        }
    }

    /// Looks up the transition for `event`, or `None` if the table has no
    /// entry for this pair.
    #[must_use]
    pub const fn transition(self, event: NavEvent) -> Option<Transition> {
        let (to, effect) = match (self, event) {
            (_, NavEvent::Cancel) => (Self::Start, Some(SideEffect::ResetOrder)),
            (Self::Start, NavEvent::StartOrder) => (Self::EntreeMenu, None),
            (Self::EntreeMenu, NavEvent::Next) => (Self::SideDishMenu, None),
            (Self::SideDishMenu, NavEvent::Next) => (Self::AccompanimentMenu, None),
            (Self::AccompanimentMenu, NavEvent::Next) => (Self::Checkout, None),
            (Self::Checkout, NavEvent::Next) => (Self::Start, Some(SideEffect::SubmitOrder)),
            (Self::Start, NavEvent::Next)
            | (
                Self::EntreeMenu | Self::SideDishMenu | Self::AccompanimentMenu | Self::Checkout,
                NavEvent::StartOrder,
            ) => return None,
        };
        Some(Transition {
            from: self,
            to,
            effect,
        })
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "Start",
            Self::EntreeMenu => "EntreeMenu",
            Self::SideDishMenu => "SideDishMenu",
            Self::AccompanimentMenu => "AccompanimentMenu",
            Self::Checkout => "Checkout",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for NavEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::StartOrder => "start order",
            Self::Next => "next",
            Self::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ScreenId::Start, NavEvent::StartOrder, ScreenId::EntreeMenu, None ; "start_order")]
    #[test_case(ScreenId::EntreeMenu, NavEvent::Next, ScreenId::SideDishMenu, None ; "entree_next")]
    #[test_case(ScreenId::SideDishMenu, NavEvent::Next, ScreenId::AccompanimentMenu, None ; "side_next")]
    #[test_case(ScreenId::AccompanimentMenu, NavEvent::Next, ScreenId::Checkout, None ; "accompaniment_next")]
    #[test_case(ScreenId::Checkout, NavEvent::Next, ScreenId::Start, Some(SideEffect::SubmitOrder) ; "checkout_submit")]
    #[test_case(ScreenId::Start, NavEvent::Cancel, ScreenId::Start, Some(SideEffect::ResetOrder) ; "start_cancel")]
    #[test_case(ScreenId::EntreeMenu, NavEvent::Cancel, ScreenId::Start, Some(SideEffect::ResetOrder) ; "entree_cancel")]
    #[test_case(ScreenId::SideDishMenu, NavEvent::Cancel, ScreenId::Start, Some(SideEffect::ResetOrder) ; "side_cancel")]
    #[test_case(ScreenId::AccompanimentMenu, NavEvent::Cancel, ScreenId::Start, Some(SideEffect::ResetOrder) ; "accompaniment_cancel")]
    #[test_case(ScreenId::Checkout, NavEvent::Cancel, ScreenId::Start, Some(SideEffect::ResetOrder) ; "checkout_cancel")]
    fn test_transition_table(
        from: ScreenId,
        event: NavEvent,
        to: ScreenId,
        effect: Option<SideEffect>,
    ) {
        let transition = from.transition(event).expect("transition should exist");
        assert_eq!(transition.from, from);
        assert_eq!(transition.to, to);
        assert_eq!(transition.effect, effect);
    }

    #[test_case(ScreenId::Start, NavEvent::Next ; "next_on_start")]
    #[test_case(ScreenId::EntreeMenu, NavEvent::StartOrder ; "start_on_entree")]
    #[test_case(ScreenId::Checkout, NavEvent::StartOrder ; "start_on_checkout")]
    fn test_missing_transitions(from: ScreenId, event: NavEvent) {
        assert!(from.transition(event).is_none());
    }

    #[test]
    fn test_forward_path_never_skips() {
        for pair in ScreenId::ALL.windows(2) {
            let event = if pair[0] == ScreenId::Start {
                NavEvent::StartOrder
            } else {
                NavEvent::Next
            };
            let transition = pair[0].transition(event).expect("forward step");
            assert_eq!(transition.to, pair[1]);
        }
    }

    #[test]
    fn test_menu_categories() {
        assert_eq!(ScreenId::Start.menu_category(), None);
        assert_eq!(
            ScreenId::EntreeMenu.menu_category(),
            Some(MenuCategory::Entree)
        );
        assert_eq!(ScreenId::Checkout.menu_category(), None);
    }
}
