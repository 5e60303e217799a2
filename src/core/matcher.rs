//! Recipe matching.

use std::collections::BTreeSet;

use super::catalog::{Catalog, Recipe};

/// Recipes matching all filters, in catalog order.
///
/// A recipe matches when it shares at least one ingredient with `ingredients`,
/// its cuisine equals `cuisine` ignoring case, and its healthiness lies in
/// `[min_health, max_health]`.
pub fn find_recipes<'a>(
    catalog: &'a Catalog,
    ingredients: &BTreeSet<String>,
    cuisine: &str,
    min_health: u8,
    max_health: u8,
) -> Vec<&'a Recipe> {
    let cuisine = cuisine.to_lowercase();

    catalog
        .recipes()
        .iter()
        .filter(|recipe| {
            recipe.ingredients.iter().any(|i| ingredients.contains(i))
                && recipe.cuisine.to_lowercase() == cuisine
                && (min_health..=max_health).contains(&recipe.healthiness)
        })
        .collect()
}
