//! Static reference data: recipes and store prices.
//!
//! A built-in catalog ships with the crate. Shells may swap it for a YAML
//! document of the form:
//!
//! ```yaml
//! recipes:
//!   - name: Pancakes
//!     ingredients: [flour, milk, eggs]
//!     instructions: Whisk, rest, fry.
//! prices:
//!   milk:
//!     - { store: Corner Shop, price: "1.50" }
//!     - { store: MegaMart, price: "1.40" }
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{PriceEntry, PriceTable, Recipe};

/// Errors loading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid catalog YAML.
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Recipes plus the price table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub prices: PriceTable,
}

impl Catalog {
    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the text is not a valid catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Look up a recipe by name, ignoring case.
    #[must_use]
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        let wanted = name.trim().to_lowercase();
        self.recipes
            .iter()
            .find(|recipe| recipe.name.to_lowercase() == wanted)
    }

    /// The reference data bundled with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let recipes = vec![
            Recipe::new(
                "Pancakes",
                ["flour", "milk", "eggs"],
                "Whisk flour, milk and eggs into a smooth batter. Rest 10 minutes, then fry ladlefuls in a hot buttered pan until golden on both sides.",
            ),
            Recipe::new(
                "Cheese Omelette",
                ["eggs", "cheese", "butter"],
                "Beat the eggs, pour into foaming butter and stir gently. Scatter grated cheese over the top and fold once set.",
            ),
            Recipe::new(
                "Tomato Pasta",
                ["pasta", "tomato sauce", "cheese"],
                "Boil the pasta in salted water. Warm the sauce, toss with the drained pasta and finish with cheese.",
            ),
            Recipe::new(
                "Rice and Beans",
                ["rice", "beans", "onion"],
                "Soften chopped onion, add rinsed beans and cooked rice, season and heat through.",
            ),
            Recipe::new(
                "Grilled Cheese",
                ["bread", "cheese", "butter"],
                "Butter the bread, fill with cheese and toast in a pan over medium heat until crisp and melted.",
            ),
        ];

        let prices = PriceTable::from_entries([
            (
                "milk",
                vec![
                    entry("Corner Shop", 150),
                    entry("MegaMart", 140),
                    entry("Farm Store", 160),
                ],
            ),
            (
                "eggs",
                vec![
                    entry("Corner Shop", 320),
                    entry("MegaMart", 299),
                    entry("Farm Store", 299),
                ],
            ),
            ("bread", vec![entry("Bakery", 275), entry("MegaMart", 199)]),
            ("flour", vec![entry("MegaMart", 120), entry("Corner Shop", 135)]),
            ("rice", vec![entry("MegaMart", 210), entry("Corner Shop", 245)]),
            ("pasta", vec![entry("Corner Shop", 99), entry("MegaMart", 109)]),
            ("cheese", vec![entry("Farm Store", 450), entry("MegaMart", 399)]),
            ("butter", vec![entry("MegaMart", 250), entry("Farm Store", 250)]),
        ]);

        Self { recipes, prices }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(store: &str, cents: i64) -> PriceEntry {
    PriceEntry::new(store, Decimal::new(cents, 2))
}
