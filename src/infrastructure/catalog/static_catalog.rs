//! Catalog fixed at startup.

use tracing::{debug, info};

use crate::domain::entities::{MenuCategory, MenuItem, Money};
use crate::domain::ports::CatalogPort;
use crate::infrastructure::config::{ConfigError, MenuConfig, MenuItemConfig};

/// In-memory catalog built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCatalog {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

fn item(name: &str, description: &str, cents: u64, image: &str) -> MenuItem {
    MenuItem::new(name, description, Money::from_cents(cents)).with_image(image)
}

impl StaticCatalog {
    /// Creates catalog from explicit item lists.
    #[must_use]
    pub const fn new(
        entrees: Vec<MenuItem>,
        side_dishes: Vec<MenuItem>,
        accompaniments: Vec<MenuItem>,
    ) -> Self {
        Self {
            entrees,
            side_dishes,
            accompaniments,
        }
    }

    /// Returns the built-in lunch menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            vec![
                item(
                    "Cauliflower",
                    "Whole cauliflower, brined, roasted, and deep fried",
                    700,
                    "entree_1",
                ),
                item(
                    "Three Bean Chili",
                    "Black beans, red beans, kidney beans, slow cooked, topped with onion",
                    400,
                    "entree_2",
                ),
                item(
                    "Mushroom Pasta",
                    "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
                    550,
                    "entree_3",
                ),
                item(
                    "Spicy Black Bean Skillet",
                    "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
                    550,
                    "entree_4",
                ),
            ],
            vec![
                item(
                    "Summer Salad",
                    "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                    250,
                    "side_1",
                ),
                item(
                    "Butternut Squash Soup",
                    "Roasted butternut squash, roasted peppers, chili oil",
                    300,
                    "side_2",
                ),
                item(
                    "Spicy Potatoes",
                    "Marble potatoes, roasted, and fried in house spice blend",
                    200,
                    "side_3",
                ),
                item(
                    "Coconut Rice",
                    "Rice, coconut milk, lime, and sugar",
                    150,
                    "side_4",
                ),
            ],
            vec![
                item(
                    "Lunch Roll",
                    "Fresh baked roll made in house",
                    50,
                    "accompaniment_1",
                ),
                item(
                    "Mixed Berries",
                    "Strawberries, blueberries, raspberries, and huckleberries",
                    100,
                    "accompaniment_2",
                ),
                item(
                    "Pickled Veggies",
                    "Pickled cucumbers and carrots, made in house",
                    50,
                    "accompaniment_3",
                ),
            ],
        )
    }

    /// Builds the catalog from configuration. Categories with no configured
    /// items keep the built-in menu.
    ///
    /// # Errors
    /// Returns `ConfigError` if an item has an empty name, or a price that is
    /// negative, not finite or above [`Money::MAX_ITEM_PRICE`].
    pub fn from_config(config: &MenuConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::builtin();
        let overrides = [
            (MenuCategory::Entree, &config.entree),
            (MenuCategory::SideDish, &config.side_dish),
            (MenuCategory::Accompaniment, &config.accompaniment),
        ];

        for (category, items) in overrides {
            if items.is_empty() {
                continue;
            }
            let parsed = items
                .iter()
                .map(Self::parse_item)
                .collect::<Result<Vec<_>, _>>()?;
            info!(%category, count = parsed.len(), "Using configured menu");
            *catalog.items_mut(category) = parsed;
        }

        debug!(
            entrees = catalog.entrees.len(),
            side_dishes = catalog.side_dishes.len(),
            accompaniments = catalog.accompaniments.len(),
            "Catalog ready"
        );
        Ok(catalog)
    }

    fn parse_item(config: &MenuItemConfig) -> Result<MenuItem, ConfigError> {
        let name = config.name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyItemName);
        }
        let price = Money::from_dollars(config.price)
            .filter(|price| *price <= Money::MAX_ITEM_PRICE)
            .ok_or_else(|| ConfigError::InvalidPrice {
                name: name.to_string(),
                price: config.price,
            })?;
        let item = MenuItem::new(name, config.description.as_str(), price);
        Ok(match &config.image {
            Some(image) => item.with_image(image.as_str()),
            None => item,
        })
    }

    fn items_mut(&mut self, category: MenuCategory) -> &mut Vec<MenuItem> {
        match category {
            MenuCategory::Entree => &mut self.entrees,
            MenuCategory::SideDish => &mut self.side_dishes,
            MenuCategory::Accompaniment => &mut self.accompaniments,
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogPort for StaticCatalog {
    fn items(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Entree => &self.entrees,
            MenuCategory::SideDish => &self.side_dishes,
            MenuCategory::Accompaniment => &self.accompaniments,
        }
    }
}
