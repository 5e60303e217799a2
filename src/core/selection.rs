//! Form selection state: checked ingredients, cuisine and healthiness range.

use super::health::{HealthRange, RangeClamp};
use super::pager::IngredientPager;

/// Everything the user has picked so far. Owned by the main window.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub pager: IngredientPager,
    cuisine: Option<String>,
    pub health: HealthRange,
}

impl SelectionState {
    pub fn new(vocabulary: Vec<String>, clamp: RangeClamp) -> Self {
        Self {
            pager: IngredientPager::new(vocabulary),
            cuisine: None,
            health: HealthRange::new(clamp),
        }
    }

    /// Selected cuisine; an empty string counts as no selection.
    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|c| !c.is_empty())
    }

    pub fn set_cuisine(&mut self, cuisine: Option<String>) {
        self.cuisine = cuisine;
    }

    /// Back to startup defaults. The current page is kept.
    pub fn clear(&mut self) {
        self.pager.clear_checked();
        self.cuisine = None;
        self.health.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = SelectionState::new(vec!["a".to_string()], RangeClamp::Push);
        assert!(state.pager.checked().is_empty());
        assert_eq!(state.pager.current_page(), 0);
        assert_eq!(state.cuisine(), None);
        assert_eq!((state.health.min(), state.health.max()), (1, 5));
    }

    #[test]
    fn test_default_config_clamps_dragged_endpoint() {
        let clamp = crate::config::Config::default().range_clamp;
        let mut state = SelectionState::new(vec!["a".to_string()], clamp);
        state.health.set_max(2);
        state.health.set_min(4);
        assert_eq!((state.health.min(), state.health.max()), (2, 2));

        state.health.set_max(1);
        assert_eq!((state.health.min(), state.health.max()), (2, 2));
    }

    #[test]
    fn test_empty_cuisine_is_none() {
        let mut state = SelectionState::default();
        state.set_cuisine(Some(String::new()));
        assert_eq!(state.cuisine(), None);
        state.set_cuisine(Some("Vegan".to_string()));
        assert_eq!(state.cuisine(), Some("Vegan"));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut state = SelectionState::new(vec!["a".to_string(), "b".to_string()], RangeClamp::Stop);
        state.pager.set_checked("a", true);
        state.set_cuisine(Some("Italian".to_string()));
        state.health.set_min(3);
        state.clear();

        assert!(state.pager.checked().is_empty());
        assert_eq!(state.cuisine(), None);
        assert_eq!((state.health.min(), state.health.max()), (1, 5));
        assert_eq!(state.health.clamp_mode(), RangeClamp::Stop);
    }
}
