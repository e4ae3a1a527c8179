//! Order session use case.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::dto::{OrderPolicy, OrderReceipt};
use crate::application::services::{FlowController, OrderStateHolder};
use crate::domain::entities::{MenuItem, OrderState};
use crate::domain::errors::OrderError;
use crate::domain::ports::CatalogPort;
use crate::domain::screen::{NavEvent, ScreenId, SideEffect};

/// One customer's pass through the ordering flow.
///
/// Receives the UI's button and selection events, keeps the flow controller
/// and the order holder in step, and applies transition side effects.
pub struct OrderSession {
    flow: FlowController,
    order: OrderStateHolder,
    submitted: u32,
}

impl OrderSession {
    /// Creates session on the start screen with an empty order.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>, policy: OrderPolicy) -> Self {
        Self {
            flow: FlowController::new(),
            order: OrderStateHolder::new(catalog, policy),
            submitted: 0,
        }
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn current_screen(&self) -> ScreenId {
        self.flow.current()
    }

    /// Returns a snapshot of the order.
    #[must_use]
    pub fn current_state(&self) -> OrderState {
        self.order.current_state()
    }

    /// Subscribes to order changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OrderState> {
        self.order.subscribe()
    }

    /// Returns the catalog offered by this session.
    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CatalogPort> {
        self.order.catalog()
    }

    /// Returns the policy in force.
    #[must_use]
    pub const fn policy(&self) -> &OrderPolicy {
        self.order.policy()
    }

    /// Returns the number of orders submitted so far.
    #[must_use]
    pub const fn submitted_count(&self) -> u32 {
        self.submitted
    }

    /// Returns whether "next" would currently be accepted.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.check_complete().is_ok() && self.flow.peek(NavEvent::Next).is_ok()
    }

    fn check_complete(&self) -> Result<(), OrderError> {
        let screen = self.flow.current();
        match screen.menu_category() {
            Some(category)
                if self.order.policy().require_selection
                    && self.order.selection(category).is_none() =>
            {
                Err(OrderError::IncompleteOrder { screen })
            }
            _ => Ok(()),
        }
    }

    /// Handles "start order" on the start screen.
    ///
    /// # Errors
    /// Returns `UnsupportedTransition` when not on the start screen.
    pub fn on_start_order_button_clicked(&mut self) -> Result<(), OrderError> {
        self.flow.fire(NavEvent::StartOrder)?;
        Ok(())
    }

    /// Handles a menu selection for the active screen's category.
    ///
    /// # Errors
    /// Returns `SelectionUnavailable` when the active screen has no menu, or
    /// `InvalidSelection` when the item is refused by the order holder.
    pub fn on_selection_changed(&mut self, item: MenuItem) -> Result<(), OrderError> {
        let screen = self.flow.current();
        let category = screen
            .menu_category()
            .ok_or(OrderError::SelectionUnavailable { screen })?;
        self.order.update(category, item)
    }

    /// Handles "next" on a menu screen or "submit" on checkout.
    ///
    /// Returns the receipt when this submitted the order.
    ///
    /// # Errors
    /// Returns `IncompleteOrder` when the active menu has no selection and the
    /// policy requires one, or `UnsupportedTransition` on the start screen.
    pub fn on_next_button_clicked(&mut self) -> Result<Option<OrderReceipt>, OrderError> {
        self.check_complete().map_err(|e| {
            debug!(error = %e, "Next refused");
            e
        })?;
        let transition = self.flow.fire(NavEvent::Next)?;
        Ok(self.apply(transition.effect))
    }

    /// Handles "cancel" on any screen. Always returns to the start screen
    /// with an empty order.
    pub fn on_cancel_button_clicked(&mut self) {
        match self.flow.fire(NavEvent::Cancel) {
            Ok(transition) => {
                self.apply(transition.effect);
            }
            Err(e) => warn!(error = %e, "Cancel not accepted"),
        }
    }

    fn apply(&mut self, effect: Option<SideEffect>) -> Option<OrderReceipt> {
        match effect? {
            SideEffect::ResetOrder => {
                info!("Order cancelled");
                self.order.reset_order();
                None
            }
            SideEffect::SubmitOrder => {
                self.submitted = self.submitted.saturating_add(1);
                let receipt = OrderReceipt::new(self.submitted, self.order.current_state());
                info!(
                    number = receipt.number,
                    items = receipt.order.items().count(),
                    subtotal = %receipt.order.subtotal(),
                    tax = %receipt.order.tax(),
                    total = %receipt.order.total(),
                    "Order submitted"
                );
                self.order.reset_order();
                Some(receipt)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MenuCategory, Money};
    use crate::domain::ports::mocks::MockCatalog;

    fn session(policy: OrderPolicy) -> (OrderSession, Arc<MockCatalog>) {
        let catalog = Arc::new(MockCatalog::new());
        (OrderSession::new(catalog.clone(), policy), catalog)
    }

    fn advance_to(session: &mut OrderSession, catalog: &MockCatalog, target: ScreenId) {
        if target == ScreenId::Start {
            return;
        }
        session.on_start_order_button_clicked().unwrap();
        while session.current_screen() != target {
            let category = session.current_screen().menu_category().unwrap();
            session.on_selection_changed(catalog.first(category)).unwrap();
            session.on_next_button_clicked().unwrap();
        }
    }

    #[test]
    fn test_cancel_from_every_screen_resets() {
        for screen in ScreenId::ALL {
            let (mut session, catalog) = session(OrderPolicy::default());
            advance_to(&mut session, &catalog, screen);
            assert_eq!(session.current_screen(), screen);

            session.on_cancel_button_clicked();

            assert_eq!(session.current_screen(), ScreenId::Start);
            assert_eq!(session.current_state(), OrderState::empty());
        }
    }

    #[test]
    fn test_submit_returns_receipt_and_resets() {
        let (mut session, catalog) = session(OrderPolicy::default());
        advance_to(&mut session, &catalog, ScreenId::Checkout);

        let receipt = session.on_next_button_clicked().unwrap().unwrap();

        assert_eq!(receipt.number, 1);
        assert_eq!(receipt.order.subtotal(), Money::from_cents(850));
        assert_eq!(receipt.order.total(), Money::from_cents(918));
        assert_eq!(session.current_screen(), ScreenId::Start);
        assert_eq!(session.current_state().total(), Money::ZERO);
        assert_eq!(session.submitted_count(), 1);
    }

    #[test]
    fn test_next_requires_selection() {
        let (mut session, _) = session(OrderPolicy::default());
        session.on_start_order_button_clicked().unwrap();
        assert!(!session.can_advance());

        let result = session.on_next_button_clicked();

        assert_eq!(
            result,
            Err(OrderError::IncompleteOrder {
                screen: ScreenId::EntreeMenu
            })
        );
        assert_eq!(session.current_screen(), ScreenId::EntreeMenu);
    }

    #[test]
    fn test_permissive_allows_skipping_selection() {
        let (mut session, _) = session(OrderPolicy::default().permissive());
        session.on_start_order_button_clicked().unwrap();

        for _ in 0..3 {
            assert!(session.can_advance());
            assert_eq!(session.on_next_button_clicked(), Ok(None));
        }

        assert_eq!(session.current_screen(), ScreenId::Checkout);
        let receipt = session.on_next_button_clicked().unwrap().unwrap();
        assert!(receipt.order.is_empty());
    }

    #[test]
    fn test_selection_goes_to_active_category() {
        let (mut session, catalog) = session(OrderPolicy::default());
        advance_to(&mut session, &catalog, ScreenId::SideDishMenu);

        let soup = catalog.items(MenuCategory::SideDish)[1].clone();
        session.on_selection_changed(soup).unwrap();

        let state = session.current_state();
        assert_eq!(state.side_dish().map(MenuItem::name), Some("Soup"));
        assert_eq!(state.entree().map(MenuItem::name), Some("Burrito"));
    }

    #[test]
    fn test_selection_rejected_off_menu_screens() {
        let (mut session, catalog) = session(OrderPolicy::default());

        let result = session.on_selection_changed(catalog.first(MenuCategory::Entree));

        assert_eq!(
            result,
            Err(OrderError::SelectionUnavailable {
                screen: ScreenId::Start
            })
        );
    }

    #[test]
    fn test_start_order_only_from_start() {
        let (mut session, _) = session(OrderPolicy::default());
        session.on_start_order_button_clicked().unwrap();

        assert!(session.on_start_order_button_clicked().is_err());
        assert_eq!(session.current_screen(), ScreenId::EntreeMenu);
    }
}
