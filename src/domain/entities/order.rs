//! Order state snapshot.

use super::{MenuCategory, MenuItem, Money, TaxRate};

/// Immutable snapshot of an in-progress order.
///
/// Totals are derived from the selections whenever a snapshot is built, so a
/// value of this type always satisfies `subtotal = sum(prices)` and
/// `total = subtotal + tax`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderState {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
    subtotal: Money,
    tax: Money,
    total: Money,
}

impl OrderState {
    /// Empty order with zero totals.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy with the selection for `category` replaced and totals
    /// recomputed at `rate`.
    #[must_use]
    pub fn with_selection(&self, category: MenuCategory, item: MenuItem, rate: TaxRate) -> Self {
        let mut next = Self {
            entree: self.entree.clone(),
            side_dish: self.side_dish.clone(),
            accompaniment: self.accompaniment.clone(),
            ..Self::default()
        };
        match category {
            MenuCategory::Entree => next.entree = Some(item),
            MenuCategory::SideDish => next.side_dish = Some(item),
            MenuCategory::Accompaniment => next.accompaniment = Some(item),
        }
        next.recompute(rate);
        next
    }

    fn recompute(&mut self, rate: TaxRate) {
        self.subtotal = self.items().map(MenuItem::price).sum();
        self.tax = rate.apply(self.subtotal);
        self.total = self.subtotal + self.tax;
    }

    /// Returns the selection for a category.
    #[must_use]
    pub const fn selection(&self, category: MenuCategory) -> Option<&MenuItem> {
        match category {
            MenuCategory::Entree => self.entree.as_ref(),
            MenuCategory::SideDish => self.side_dish.as_ref(),
            MenuCategory::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    /// Returns the selected entree.
    #[must_use]
    pub const fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    /// Returns the selected side dish.
    #[must_use]
    pub const fn side_dish(&self) -> Option<&MenuItem> {
        self.side_dish.as_ref()
    }

    /// Returns the selected accompaniment.
    #[must_use]
    pub const fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

    /// Iterates over selected items in ordering sequence.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        [&self.entree, &self.side_dish, &self.accompaniment]
            .into_iter()
            .flatten()
    }

    /// Returns the sum of selected prices.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Returns the tax on the subtotal.
    #[must_use]
    pub const fn tax(&self) -> Money {
        self.tax
    }

    /// Returns subtotal plus tax.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: u64) -> MenuItem {
        MenuItem::new(name, "", Money::from_cents(cents))
    }

    #[test]
    fn test_empty_order() {
        let order = OrderState::empty();
        assert!(order.is_empty());
        assert_eq!(order.subtotal(), Money::ZERO);
        assert_eq!(order.tax(), Money::ZERO);
        assert_eq!(order.total(), Money::ZERO);
    }

    #[test]
    fn test_full_order_totals() {
        let rate = TaxRate::DEFAULT;
        let order = OrderState::empty()
            .with_selection(MenuCategory::Entree, item("Burrito", 500), rate)
            .with_selection(MenuCategory::SideDish, item("Fries", 200), rate)
            .with_selection(MenuCategory::Accompaniment, item("Side salad", 150), rate);

        assert_eq!(order.subtotal(), Money::from_cents(850));
        assert_eq!(order.tax(), Money::from_cents(68));
        assert_eq!(order.total(), Money::from_cents(918));
        assert_eq!(order.items().count(), 3);
    }

    #[test]
    fn test_replacing_selection_recomputes() {
        let rate = TaxRate::DEFAULT;
        let order = OrderState::empty()
            .with_selection(MenuCategory::Entree, item("Burrito", 500), rate)
            .with_selection(MenuCategory::Entree, item("Chili", 400), rate);

        assert_eq!(order.entree().map(MenuItem::name), Some("Chili"));
        assert_eq!(order.subtotal(), Money::from_cents(400));
        assert_eq!(order.total(), order.subtotal() + order.tax());
    }

    #[test]
    fn test_selection_lookup_by_category() {
        let order = OrderState::empty().with_selection(
            MenuCategory::SideDish,
            item("Fries", 200),
            TaxRate::DEFAULT,
        );

        assert!(order.selection(MenuCategory::Entree).is_none());
        assert_eq!(
            order.selection(MenuCategory::SideDish).map(MenuItem::name),
            Some("Fries")
        );
    }
}
