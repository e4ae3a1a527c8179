//! Menu catalog port definition.

use crate::domain::entities::{MenuCategory, MenuItem};

/// Read-only source of the items offered on each menu.
///
/// Implementations must return the same sequence for every call during the
/// process lifetime.
pub trait CatalogPort: Send + Sync {
    /// Returns the items offered for a category, in display order.
    fn items(&self, category: MenuCategory) -> &[MenuItem];

    /// Checks whether an item is offered for a category.
    fn contains(&self, category: MenuCategory, item: &MenuItem) -> bool {
        self.items(category).iter().any(|offered| offered == item)
    }
}

/// Fixed catalog used by tests.
#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::entities::Money;

    /// Small fixed catalog for tests.
    pub struct MockCatalog {
        entrees: Vec<MenuItem>,
        side_dishes: Vec<MenuItem>,
        accompaniments: Vec<MenuItem>,
    }

    impl MockCatalog {
        /// Creates the catalog.
        pub fn new() -> Self {
            Self {
                entrees: vec![
                    MenuItem::new("Burrito", "Bean burrito", Money::from_cents(500)),
                    MenuItem::new("Chili", "Three bean chili", Money::from_cents(400)),
                ],
                side_dishes: vec![
                    MenuItem::new("Fries", "Crispy fries", Money::from_cents(200)),
                    MenuItem::new("Soup", "Squash soup", Money::from_cents(300)),
                ],
                accompaniments: vec![
                    MenuItem::new("Side salad", "Greens", Money::from_cents(150)),
                    MenuItem::new("Roll", "Lunch roll", Money::from_cents(50)),
                ],
            }
        }

        /// Returns the first item of a category.
        pub fn first(&self, category: MenuCategory) -> MenuItem {
            self.items(category)[0].clone()
        }
    }

    impl Default for MockCatalog {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogPort for MockCatalog {
        fn items(&self, category: MenuCategory) -> &[MenuItem] {
            match category {
                MenuCategory::Entree => &self.entrees,
                MenuCategory::SideDish => &self.side_dishes,
                MenuCategory::Accompaniment => &self.accompaniments,
            }
        }
    }
}
