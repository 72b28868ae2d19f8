//! Recipe reference data.

use serde::{Deserialize, Serialize};

/// A recipe from the catalog. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient names in display order, matched against items by name.
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Create a new recipe.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, instructions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            instructions: instructions.into(),
        }
    }
}
