//! Menu item entity.

use super::Money;

/// Category of a menu, one per ordering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    /// Main dish.
    Entree,
    /// Side dish.
    SideDish,
    /// Small accompaniment.
    Accompaniment,
}

impl MenuCategory {
    /// All categories in ordering sequence.
    pub const ALL: [Self; 3] = [Self::Entree, Self::SideDish, Self::Accompaniment];

    /// Returns the human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Entree => "Entree",
            Self::SideDish => "Side Dish",
            Self::Accompaniment => "Accompaniment",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A purchasable item offered on one of the menus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    name: String,
    description: String,
    price: Money,
    image_ref: Option<String>,
}

impl MenuItem {
    /// Creates a new menu item.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image_ref: None,
        }
    }

    /// Sets the opaque image asset reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the item price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the image asset reference.
    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}
