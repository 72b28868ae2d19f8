//! Recipe and price commands.

use pantry_core::Action;
use pantry_core::recipes::{recipe_status, recipe_statuses};

use super::{CommandError, Pantry};

/// Report which catalog recipes can be cooked now.
#[must_use]
pub fn recipes(pantry: &Pantry) -> Vec<String> {
    recipe_statuses(&pantry.catalog().recipes, &pantry.state().inventory)
        .iter()
        .map(|status| {
            if status.cookable() {
                format!("{}: ready to cook", status.recipe.name)
            } else {
                format!("{}: missing {}", status.recipe.name, status.missing.join(", "))
            }
        })
        .collect()
}

/// Cook a recipe, using one step of each ingredient.
///
/// A recipe with missing ingredients leaves the pantry unchanged.
///
/// # Errors
///
/// Returns `CommandError` for an unknown recipe or a failed write.
pub fn cook(pantry: &mut Pantry, name: &str) -> Result<Vec<String>, CommandError> {
    let recipe = pantry
        .catalog()
        .recipe(name)
        .ok_or_else(|| CommandError::UnknownRecipe(name.to_owned()))?;

    let status = recipe_status(recipe, &pantry.state().inventory);
    if !status.cookable() {
        return Ok(vec![format!(
            "Cannot cook {}: missing {}",
            recipe.name,
            status.missing.join(", ")
        )]);
    }

    let recipe_name = recipe.name.clone();
    pantry.dispatch(Action::Cook(recipe_name.clone()))?;

    let mut lines = vec![format!("Cooked {recipe_name}")];
    if let Some(recipe) = pantry.catalog().recipe(&recipe_name)
        && !recipe.instructions.is_empty()
    {
        lines.push(recipe.instructions.clone());
    }
    Ok(lines)
}

/// Report the cheapest store for an item.
#[must_use]
pub fn cheapest(pantry: &Pantry, item_name: &str) -> Vec<String> {
    let line = pantry.catalog().prices.cheapest(item_name).map_or_else(
        || format!("No prices known for {item_name}"),
        |entry| format!("Cheapest {item_name}: {entry}"),
    );
    vec![line]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pantry_core::{ItemId, PantryItem};

    use super::*;
    use crate::commands::testing::pantry;

    fn stock(pantry: &mut Pantry, names: &[&str]) {
        for name in names {
            let item = PantryItem {
                id: ItemId::generate(),
                name: (*name).to_owned(),
                quantity: 1,
                expires_on: None,
                barcode: None,
                regular: false,
            };
            pantry.dispatch(Action::AddItem(item)).unwrap();
        }
    }

    #[test]
    fn test_recipes_report_missing() {
        let mut pantry = pantry();
        stock(&mut pantry, &["Flour", "Milk"]);
        let lines = recipes(&pantry);
        assert!(lines.contains(&"Pancakes: missing eggs".to_owned()));
    }

    #[test]
    fn test_cook_uses_ingredients() {
        let mut pantry = pantry();
        stock(&mut pantry, &["flour", "milk", "eggs"]);

        let lines = cook(&mut pantry, "pancakes").unwrap();
        assert_eq!(lines[0], "Cooked Pancakes");
        assert!(pantry.state().inventory.iter().all(|item| item.quantity == 0));

        let lines = cook(&mut pantry, "Pancakes").unwrap();
        assert!(lines[0].starts_with("Cannot cook Pancakes"));
    }

    #[test]
    fn test_cook_unknown_recipe() {
        assert!(matches!(
            cook(&mut pantry(), "Souffle"),
            Err(CommandError::UnknownRecipe(_))
        ));
    }

    #[test]
    fn test_cheapest() {
        let pantry = pantry();
        assert_eq!(cheapest(&pantry, "Milk"), vec!["Cheapest Milk: MegaMart ($1.40)"]);
        assert_eq!(cheapest(&pantry, "saffron"), vec!["No prices known for saffron"]);
    }
}
