use uuid::Uuid;

use crate::models::{Category, Dish, Tag};

mod builtin;

/// The fixed universe of dishes and selectable tags
///
/// A catalog is built once and only read afterwards. The engine and the API
/// receive it explicitly, so tests can hand in small synthetic catalogs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
    tags: Vec<Tag>,
}

impl Catalog {
    /// Creates a catalog from the given dishes and tags
    pub fn new(dishes: Vec<Dish>, tags: Vec<Tag>) -> Self {
        Self { dishes, tags }
    }

    /// The default home-cooking catalog
    pub fn builtin() -> Self {
        Self::new(builtin::dishes(), builtin::tags())
    }

    pub fn all_dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn dish(&self, id: &Uuid) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == *id)
    }

    pub fn tag(&self, id: &Uuid) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == *id)
    }

    /// Tags offered for `category`, in catalog order
    pub fn tags_in(&self, category: Category) -> Vec<&Tag> {
        self.tags
            .iter()
            .filter(|t| t.category() == category)
            .collect()
    }

    /// All tags grouped by category in display order, catalog order within a group
    pub fn tags_in_display_order(&self) -> Vec<&Tag> {
        Category::display_order()
            .into_iter()
            .flat_map(|category| self.tags_in(category))
            .collect()
    }
}
