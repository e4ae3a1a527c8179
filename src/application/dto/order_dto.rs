//! Ordering DTOs.

use crate::domain::entities::{OrderState, TaxRate};

/// Validation and pricing rules applied to an order session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    /// Tax rate applied to the subtotal.
    pub tax_rate: TaxRate,
    /// Refuse "next" on a menu screen until something is selected.
    pub require_selection: bool,
    /// Refuse items that are not on the screen's menu.
    pub validate_membership: bool,
}

impl OrderPolicy {
    /// Strict policy at the given tax rate.
    #[must_use]
    pub const fn new(tax_rate: TaxRate) -> Self {
        Self {
            tax_rate,
            require_selection: true,
            validate_membership: true,
        }
    }

    /// Disables both validations.
    #[must_use]
    pub const fn permissive(mut self) -> Self {
        self.require_selection = false;
        self.validate_membership = false;
        self
    }
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self::new(TaxRate::DEFAULT)
    }
}

/// Order handed off at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Sequence number within the session, starting at 1.
    pub number: u32,
    /// Order as it was when submitted.
    pub order: OrderState,
}

impl OrderReceipt {
    /// Creates new receipt.
    #[must_use]
    pub const fn new(number: u32, order: OrderState) -> Self {
        Self { number, order }
    }

    /// Returns a one-line confirmation message.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Order #{} submitted: {} item(s), total {}",
            self.number,
            self.order.items().count(),
            self.order.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_are_strict() {
        let policy = OrderPolicy::default();
        assert!(policy.require_selection);
        assert!(policy.validate_membership);
        assert_eq!(policy.tax_rate, TaxRate::DEFAULT);

        let permissive = policy.permissive();
        assert!(!permissive.require_selection);
        assert!(!permissive.validate_membership);
    }

    #[test]
    fn test_empty_receipt_summary() {
        let receipt = OrderReceipt::new(2, OrderState::empty());
        assert_eq!(receipt.summary(), "Order #2 submitted: 0 item(s), total $0.00");
    }
}
