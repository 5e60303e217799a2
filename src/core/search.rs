//! Search action: validates the selection, runs the matcher and renders the
//! results text shown in the form.

use thiserror::Error;
use tracing::{debug, info};

use super::catalog::{Catalog, Recipe};
use super::matcher;
use super::selection::SelectionState;

/// Text shown when a search finds nothing.
pub const NO_MATCHES: &str = "No matching recipes found.";

/// Selection problems that abort a search before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please select at least one ingredient!")]
    NoIngredients,
    #[error("Please select a type of cuisine!")]
    NoCuisine,
}

impl SearchError {
    /// Heading for the notice shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            SearchError::NoIngredients => "No Ingredients",
            SearchError::NoCuisine => "No Cuisine",
        }
    }
}

/// Outcome of a successful search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub matches: Vec<Recipe>,
    pub rendered: String,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Runs searches against one catalog.
pub struct RecipeSearch<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecipeSearch<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Search with the current selection.
    ///
    /// Ingredients are checked before cuisine, so with both missing only
    /// `NoIngredients` is reported.
    pub fn search(&self, state: &SelectionState) -> Result<SearchResult, SearchError> {
        let checked = state.pager.checked();
        if checked.is_empty() {
            info!("search rejected: no ingredients selected");
            return Err(SearchError::NoIngredients);
        }

        let cuisine = state.cuisine().ok_or_else(|| {
            info!("search rejected: no cuisine selected");
            SearchError::NoCuisine
        })?;

        debug!(
            ingredients = checked.len(),
            cuisine,
            min = state.health.min(),
            max = state.health.max(),
            "running recipe search"
        );

        let matches: Vec<Recipe> = matcher::find_recipes(
            self.catalog,
            checked,
            cuisine,
            state.health.min(),
            state.health.max(),
        )
        .into_iter()
        .cloned()
        .collect();

        info!(matches = matches.len(), "recipe search complete");

        let rendered = render_matches(&matches);
        Ok(SearchResult { matches, rendered })
    }
}

/// Format matches for the results area, or `NO_MATCHES` when empty.
pub fn render_matches(matches: &[Recipe]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut out = String::new();
    for recipe in matches {
        out.push_str(&format!("Name: {}\n", recipe.name));
        out.push_str(&format!("Ingredients: {}\n", recipe.ingredients.join(", ")));
        out.push_str(&format!("Instructions: {}\n\n", recipe.instructions));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BUILTIN_CATALOG;
    use crate::core::health::RangeClamp;

    fn state_with(ingredients: &[&str], cuisine: Option<&str>) -> SelectionState {
        let mut state = SelectionState::new(BUILTIN_CATALOG.vocabulary().to_vec(), RangeClamp::Push);
        for ingredient in ingredients {
            state.pager.set_checked(ingredient, true);
        }
        state.set_cuisine(cuisine.map(str::to_string));
        state
    }

    #[test]
    fn test_search_finds_salad() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let result = search.search(&state_with(&["chicken"], Some("Healthy"))).unwrap();
        assert!(result.found());
        assert_eq!(
            result.rendered,
            "Name: Grilled Chicken Salad\n\
             Ingredients: chicken, lettuce, tomato, olive oil\n\
             Instructions: Grill the chicken and mix with other ingredients.\n\n"
        );
    }

    #[test]
    fn test_search_no_matches_message() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let result = search.search(&state_with(&["chicken"], Some("Vegan"))).unwrap();
        assert!(!result.found());
        assert_eq!(result.rendered, NO_MATCHES);
    }

    #[test]
    fn test_search_requires_ingredients() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let err = search.search(&state_with(&[], Some("Healthy"))).unwrap_err();
        assert_eq!(err, SearchError::NoIngredients);
        assert_eq!(err.title(), "No Ingredients");
        assert_eq!(err.to_string(), "Please select at least one ingredient!");
    }

    #[test]
    fn test_search_requires_cuisine() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let err = search.search(&state_with(&["pasta"], None)).unwrap_err();
        assert_eq!(err, SearchError::NoCuisine);
        assert_eq!(err.title(), "No Cuisine");

        let err = search.search(&state_with(&["pasta"], Some(""))).unwrap_err();
        assert_eq!(err, SearchError::NoCuisine);
    }

    #[test]
    fn test_ingredients_checked_before_cuisine() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let err = search.search(&state_with(&[], None)).unwrap_err();
        assert_eq!(err, SearchError::NoIngredients);
    }

    #[test]
    fn test_search_is_idempotent() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let state = state_with(&["lettuce", "pasta"], Some("vegan"));
        let first = search.search(&state).unwrap();
        let second = search.search(&state).unwrap();
        assert_eq!(first.matches, second.matches);
        assert_eq!(first.rendered, second.rendered);
        assert_eq!(first.matches.len(), 1);
        assert_eq!(first.matches[0].name, "Vegan Tacos");
    }

    #[test]
    fn test_search_respects_health_range() {
        let search = RecipeSearch::new(&BUILTIN_CATALOG);
        let mut state = state_with(&["pasta"], Some("Italian"));
        state.health.set_min(3);
        let result = search.search(&state).unwrap();
        assert_eq!(result.rendered, NO_MATCHES);
    }

    #[test]
    fn test_render_separates_recipes() {
        let recipes = BUILTIN_CATALOG.recipes().to_vec();
        let rendered = render_matches(&recipes);
        assert_eq!(rendered.matches("Name: ").count(), 3);
        assert!(rendered.ends_with("\n\n"));
        assert!(rendered.contains("Ingredients: pasta, cream, parmesan\n"));
    }
}
