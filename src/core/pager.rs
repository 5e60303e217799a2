//! Paged view over the ingredient vocabulary.
//!
//! Checked state is keyed by ingredient name, so switching pages never loses
//! or duplicates a selection.

use std::collections::BTreeSet;

/// Number of ingredients shown per page.
pub const PAGE_SIZE: usize = 10;

/// Current page plus the set of checked ingredients.
#[derive(Debug, Clone, Default)]
pub struct IngredientPager {
    vocabulary: Vec<String>,
    current_page: usize,
    checked: BTreeSet<String>,
}

impl IngredientPager {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            current_page: 0,
            checked: BTreeSet::new(),
        }
    }

    /// Ingredients at indices `[n * PAGE_SIZE, n * PAGE_SIZE + PAGE_SIZE)`,
    /// truncated at the end of the vocabulary.
    pub fn page(&self, n: usize) -> &[String] {
        let start = n.saturating_mul(PAGE_SIZE).min(self.vocabulary.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.vocabulary.len());
        &self.vocabulary[start..end]
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_items(&self) -> &[String] {
        self.page(self.current_page)
    }

    /// Total number of non-empty pages.
    pub fn page_count(&self) -> usize {
        self.vocabulary.len().div_ceil(PAGE_SIZE)
    }

    pub fn has_next(&self) -> bool {
        (self.current_page + 1) * PAGE_SIZE < self.vocabulary.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Advance one page. No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. No-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_checked(&self, ingredient: &str) -> bool {
        self.checked.contains(ingredient)
    }

    /// Mark an ingredient checked or unchecked. Names outside the vocabulary
    /// are ignored.
    pub fn set_checked(&mut self, ingredient: &str, checked: bool) {
        if checked {
            if self.vocabulary.iter().any(|v| v == ingredient) {
                self.checked.insert(ingredient.to_string());
            }
        } else {
            self.checked.remove(ingredient);
        }
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    /// Checked ingredients in vocabulary order.
    pub fn checked_in_order(&self) -> Vec<&str> {
        self.vocabulary
            .iter()
            .filter(|v| self.checked.contains(v.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }
}
