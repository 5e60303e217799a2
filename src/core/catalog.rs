//! Built-in recipe catalog and ingredient vocabulary.
//!
//! Everything here is constructed once at startup and never mutated.

use once_cell::sync::Lazy;

/// Single recipe record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cuisine: String,
    /// 1 (indulgent) to 5 (very healthy).
    pub healthiness: u8,
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        name: &str,
        ingredients: &[&str],
        cuisine: &str,
        healthiness: u8,
        instructions: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cuisine: cuisine.to_string(),
            healthiness,
            instructions: instructions.to_string(),
        }
    }
}

/// Read-only set of recipes plus the options offered by the form.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    vocabulary: Vec<String>,
    cuisines: Vec<String>,
}

/// Catalog shipped with the application.
pub static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

const BUILTIN_VOCABULARY: [&str; 21] = [
    "chicken",
    "lettuce",
    "tomato",
    "olive oil",
    "pasta",
    "cream",
    "parmesan",
    "tortilla",
    "black beans",
    "avocado",
    "cheese",
    "onion",
    "spinach",
    "bread",
    "rice",
    "milk",
    "eggs",
    "potato",
    "carrot",
    "peanut butter",
    "jam",
];

const BUILTIN_CUISINES: [&str; 3] = ["Healthy", "Italian", "Vegan"];

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, vocabulary: Vec<String>, cuisines: Vec<String>) -> Self {
        Self {
            recipes,
            vocabulary,
            cuisines,
        }
    }

    fn builtin() -> Self {
        let recipes = vec![
            Recipe::new(
                "Grilled Chicken Salad",
                &["chicken", "lettuce", "tomato", "olive oil"],
                "Healthy",
                5,
                "Grill the chicken and mix with other ingredients.",
            ),
            Recipe::new(
                "Pasta Alfredo",
                &["pasta", "cream", "parmesan"],
                "Italian",
                2,
                "Cook pasta, mix with cream and parmesan.",
            ),
            Recipe::new(
                "Vegan Tacos",
                &["tortilla", "black beans", "avocado", "lettuce"],
                "Vegan",
                4,
                "Fill tortillas with beans, avocado, and lettuce.",
            ),
        ];

        Self::new(
            recipes,
            BUILTIN_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            BUILTIN_CUISINES.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Selectable ingredient names in display order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }
}
