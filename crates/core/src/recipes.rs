//! Recipe feasibility against the current inventory, and cooking.

use crate::types::{PantryItem, Recipe};

/// Whether a recipe can be cooked, and what it lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStatus<'a> {
    pub recipe: &'a Recipe,
    /// Ingredients with no matching item, or whose item has run out.
    pub missing: Vec<&'a str>,
}

impl RecipeStatus<'_> {
    /// A recipe is cookable when nothing is missing.
    #[must_use]
    pub fn cookable(&self) -> bool {
        self.missing.is_empty()
    }
}

/// First item whose name matches `ingredient`, ignoring case.
#[must_use]
pub fn find_ingredient<'a>(items: &'a [PantryItem], ingredient: &str) -> Option<&'a PantryItem> {
    items.iter().find(|item| item.is_named(ingredient))
}

/// Check one recipe against the inventory.
#[must_use]
pub fn recipe_status<'a>(recipe: &'a Recipe, items: &[PantryItem]) -> RecipeStatus<'a> {
    let missing = recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            find_ingredient(items, ingredient).is_none_or(|item| !item.in_stock())
        })
        .map(String::as_str)
        .collect();

    RecipeStatus { recipe, missing }
}

/// Check every recipe, in catalog order.
#[must_use]
pub fn recipe_statuses<'a>(recipes: &'a [Recipe], items: &[PantryItem]) -> Vec<RecipeStatus<'a>> {
    recipes
        .iter()
        .map(|recipe| recipe_status(recipe, items))
        .collect()
}

/// Consume one portion of each ingredient of a cookable recipe.
///
/// Returns `false` and leaves the inventory untouched if the recipe is not
/// cookable. Quantities never drop below zero.
pub fn cook(items: &mut [PantryItem], recipe: &Recipe, step: u32) -> bool {
    if !recipe_status(recipe, items).cookable() {
        return false;
    }

    for ingredient in &recipe.ingredients {
        if let Some(item) = items.iter_mut().find(|item| item.is_named(ingredient)) {
            item.consume(step);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn stock(name: &str, quantity: i64) -> PantryItem {
        PantryItem {
            id: ItemId::generate(),
            name: name.to_owned(),
            quantity,
            expires_on: None,
            barcode: None,
            regular: false,
        }
    }

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes", ["flour", "milk", "eggs"], "Mix and fry.")
    }

    fn full_pantry() -> Vec<PantryItem> {
        vec![stock("Flour", 2), stock("MILK", 1), stock("eggs", 6)]
    }

    #[test]
    fn test_all_ingredients_present_is_cookable() {
        let recipe = pancakes();
        let status = recipe_status(&recipe, &full_pantry());
        assert!(status.missing.is_empty());
        assert!(status.cookable());
    }

    #[test]
    fn test_removed_ingredient_is_missing() {
        let recipe = pancakes();
        let mut items = full_pantry();
        items.remove(1);
        let status = recipe_status(&recipe, &items);
        assert_eq!(status.missing, vec!["milk"]);
        assert!(!status.cookable());
    }

    #[test]
    fn test_zero_quantity_ingredient_is_missing() {
        let recipe = pancakes();
        let mut items = full_pantry();
        items[2].quantity = 0;
        let status = recipe_status(&recipe, &items);
        assert_eq!(status.missing, vec!["eggs"]);
    }

    #[test]
    fn test_cook_decrements_each_ingredient_once() {
        let recipe = pancakes();
        let mut items = full_pantry();
        assert!(cook(&mut items, &recipe, 1));
        let quantities: Vec<i64> = items.iter().map(|item| item.quantity).collect();
        assert_eq!(quantities, vec![1, 0, 5]);
    }

    #[test]
    fn test_cook_refuses_when_missing() {
        let recipe = pancakes();
        let mut items = vec![stock("flour", 2), stock("milk", 0), stock("eggs", 6)];
        let before = items.clone();
        assert!(!cook(&mut items, &recipe, 1));
        assert_eq!(items, before);
    }

    #[test]
    fn test_cook_large_step_clamps_at_zero() {
        let recipe = pancakes();
        let mut items = full_pantry();
        assert!(cook(&mut items, &recipe, 3));
        assert!(items.iter().all(|item| item.quantity >= 0));
        assert_eq!(items[2].quantity, 3);
    }

    #[test]
    fn test_statuses_follow_catalog_order() {
        let recipes = vec![pancakes(), Recipe::new("Toast", ["bread"], "")];
        let statuses = recipe_statuses(&recipes, &full_pantry());
        assert!(statuses[0].cookable());
        assert_eq!(statuses[1].missing, vec!["bread"]);
    }
}
