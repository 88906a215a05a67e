use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use super::{Category, Dish, Tag};

/// Everything a user has picked during one diagnosis session
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SelectionState {
    /// Dishes the user explicitly wants, in the order they were added
    pub liked_dishes: Vec<Dish>,
    /// Dishes the user refuses; these are never suggested
    pub excluded_dishes: Vec<Dish>,
    /// Preference tags, unique by tag identity
    pub selected_tags: Vec<Tag>,
}

impl SelectionState {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a liked dish. Returns false if it was already liked.
    pub fn add_liked(&mut self, dish: Dish) -> bool {
        if self.is_liked(&dish.id) {
            return false;
        }
        self.liked_dishes.push(dish);
        true
    }

    pub fn remove_liked(&mut self, dish_id: &Uuid) -> bool {
        let before = self.liked_dishes.len();
        self.liked_dishes.retain(|d| d.id != *dish_id);
        self.liked_dishes.len() != before
    }

    /// Adds an excluded dish. Returns false if it was already excluded.
    pub fn add_excluded(&mut self, dish: Dish) -> bool {
        if self.is_excluded(&dish.id) {
            return false;
        }
        self.excluded_dishes.push(dish);
        true
    }

    pub fn remove_excluded(&mut self, dish_id: &Uuid) -> bool {
        let before = self.excluded_dishes.len();
        self.excluded_dishes.retain(|d| d.id != *dish_id);
        self.excluded_dishes.len() != before
    }

    pub fn is_liked(&self, dish_id: &Uuid) -> bool {
        self.liked_dishes.iter().any(|d| d.id == *dish_id)
    }

    pub fn is_excluded(&self, dish_id: &Uuid) -> bool {
        self.excluded_dishes.iter().any(|d| d.id == *dish_id)
    }

    /// Selects the tag if it is not selected, deselects it otherwise.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: Tag) -> bool {
        if self.is_selected(&tag) {
            self.selected_tags.retain(|t| *t != tag);
            false
        } else {
            self.selected_tags.push(tag);
            true
        }
    }

    /// Selects the tag, leaving the selection unchanged if it is already there
    pub fn select_tag(&mut self, tag: Tag) {
        if !self.is_selected(&tag) {
            self.selected_tags.push(tag);
        }
    }

    pub fn is_selected(&self, tag: &Tag) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Categories represented by at least one selected tag
    pub fn selected_categories(&self) -> HashSet<Category> {
        self.selected_tags.iter().map(Tag::category).collect()
    }

    /// Drops every selection, returning to the state of a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, MainIngredient, TagValue, Taste};

    fn dish(name: &str) -> Dish {
        Dish::new(name, Vec::<String>::new(), [TagValue::from(Genre::Japanese)]).unwrap()
    }

    #[test]
    fn test_new_selection() {
        let state = SelectionState::new();
        assert!(state.liked_dishes.is_empty());
        assert!(state.excluded_dishes.is_empty());
        assert!(state.selected_tags.is_empty());
    }

    #[test]
    fn test_add_liked_ignores_duplicates() {
        let mut state = SelectionState::new();
        let curry = dish("カレーライス");
        assert!(state.add_liked(curry.clone()));
        assert!(!state.add_liked(curry.clone()));
        assert_eq!(state.liked_dishes.len(), 1);
        assert!(state.is_liked(&curry.id));
    }

    #[test]
    fn test_liked_keeps_insertion_order() {
        let mut state = SelectionState::new();
        let names = ["親子丼", "ラーメン", "オムライス"];
        for name in names {
            state.add_liked(dish(name));
        }
        let listed: Vec<&str> = state.liked_dishes.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_remove_excluded() {
        let mut state = SelectionState::new();
        let natto = dish("納豆ご飯");
        state.add_excluded(natto.clone());
        assert!(state.remove_excluded(&natto.id));
        assert!(!state.remove_excluded(&natto.id));
        assert!(!state.is_excluded(&natto.id));
    }

    #[test]
    fn test_toggle_tag() {
        let mut state = SelectionState::new();
        let hearty = Tag::emoji("がっつり", "🔥", Taste::Hearty);
        assert!(state.toggle_tag(hearty.clone()));
        assert!(state.is_selected(&hearty));
        assert!(!state.toggle_tag(hearty.clone()));
        assert!(!state.is_selected(&hearty));
    }

    #[test]
    fn test_select_tag_is_idempotent() {
        let mut state = SelectionState::new();
        let meat = Tag::emoji("お肉", "🍖", MainIngredient::Meat);
        state.select_tag(meat.clone());
        state.select_tag(meat);
        assert_eq!(state.selected_tags.len(), 1);
    }

    #[test]
    fn test_selected_categories() {
        let mut state = SelectionState::new();
        state.select_tag(Tag::emoji("和食", "🇯🇵", Genre::Japanese));
        state.select_tag(Tag::emoji("洋食", "🍝", Genre::Western));
        state.select_tag(Tag::emoji("がっつり", "🔥", Taste::Hearty));

        let categories = state.selected_categories();
        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&Category::Genre));
        assert!(categories.contains(&Category::Taste));
    }

    #[test]
    fn test_reset() {
        let mut state = SelectionState::new();
        state.add_liked(dish("寿司"));
        state.select_tag(Tag::emoji("和食", "🇯🇵", Genre::Japanese));
        state.reset();
        assert_eq!(state, SelectionState::new());
    }
}
