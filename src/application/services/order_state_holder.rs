//! Owner of the in-progress order.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::application::dto::OrderPolicy;
use crate::domain::entities::{MenuCategory, MenuItem, OrderState};
use crate::domain::errors::OrderError;
use crate::domain::ports::CatalogPort;

/// Single writer of an order session's state.
///
/// Every mutation publishes a complete new snapshot through a `watch`
/// channel, so subscribers never observe a half-applied update.
pub struct OrderStateHolder {
    catalog: Arc<dyn CatalogPort>,
    policy: OrderPolicy,
    state_tx: watch::Sender<OrderState>,
}

impl OrderStateHolder {
    /// Creates holder with an empty order.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogPort>, policy: OrderPolicy) -> Self {
        let (state_tx, _) = watch::channel(OrderState::empty());
        Self {
            catalog,
            policy,
            state_tx,
        }
    }

    /// Returns the policy in force.
    #[must_use]
    pub const fn policy(&self) -> &OrderPolicy {
        &self.policy
    }

    /// Returns the catalog orders are validated against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn CatalogPort> {
        &self.catalog
    }

    /// Returns a snapshot of the current order.
    #[must_use]
    pub fn current_state(&self) -> OrderState {
        self.state_tx.borrow().clone()
    }

    /// Returns the item currently selected for a category.
    #[must_use]
    pub fn selection(&self, category: MenuCategory) -> Option<MenuItem> {
        self.state_tx.borrow().selection(category).cloned()
    }

    /// Subscribes to order changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OrderState> {
        self.state_tx.subscribe()
    }

    /// Replaces the selection for a category.
    ///
    /// # Errors
    /// Returns `InvalidSelection` if membership validation is enabled and the
    /// item is not on the category's menu. The order is left unchanged.
    pub fn update(&self, category: MenuCategory, item: MenuItem) -> Result<(), OrderError> {
        if self.policy.validate_membership && !self.catalog.contains(category, &item) {
            warn!(item = %item.name(), %category, "Rejected selection not on menu");
            return Err(OrderError::invalid_selection(item.name(), category));
        }

        debug!(
            item = %item.name(),
            price = %item.price(),
            image = item.image_ref(),
            %category,
            "Selection changed"
        );
        let next = self
            .state_tx
            .borrow()
            .with_selection(category, item, self.policy.tax_rate);
        debug!(subtotal = %next.subtotal(), total = %next.total(), "Order repriced");
        self.state_tx.send_replace(next);
        Ok(())
    }

    /// Replaces the entree.
    ///
    /// # Errors
    /// See [`Self::update`].
    pub fn update_entree(&self, item: MenuItem) -> Result<(), OrderError> {
        self.update(MenuCategory::Entree, item)
    }

    /// Replaces the side dish.
    ///
    /// # Errors
    /// See [`Self::update`].
    pub fn update_side_dish(&self, item: MenuItem) -> Result<(), OrderError> {
        self.update(MenuCategory::SideDish, item)
    }

    /// Replaces the accompaniment.
    ///
    /// # Errors
    /// See [`Self::update`].
    pub fn update_accompaniment(&self, item: MenuItem) -> Result<(), OrderError> {
        self.update(MenuCategory::Accompaniment, item)
    }

    /// Clears all selections and totals.
    pub fn reset_order(&self) {
        debug!("Order reset");
        self.state_tx.send_replace(OrderState::empty());
    }
}
