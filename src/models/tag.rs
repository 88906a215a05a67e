use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use super::{Category, ModelError, TagValue};

/// How a tag's icon should be drawn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Icon {
    Emoji(String),
    Symbol(String),
}

/// A selectable preference marker
///
/// Tags compare and hash by identity only, so two tags carrying the same
/// value are still distinct members of a selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub icon: Icon,
    #[serde(flatten)]
    value: TagValue,
}

impl Tag {
    /// Creates a tag whose category is taken from its value
    pub fn new(name: impl Into<String>, icon: Icon, value: impl Into<TagValue>) -> Self {
        let value = value.into();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon,
            value,
        }
    }

    /// Creates a tag from an explicitly declared category, rejecting values
    /// from any other category's domain
    pub fn with_category(
        name: impl Into<String>,
        icon: Icon,
        category: Category,
        value: TagValue,
    ) -> Result<Self, ModelError> {
        if value.category() != category {
            return Err(ModelError::CategoryMismatch { category, value });
        }
        Ok(Self::new(name, icon, value))
    }

    pub fn emoji(name: impl Into<String>, emoji: &str, value: impl Into<TagValue>) -> Self {
        Self::new(name, Icon::Emoji(emoji.to_string()), value)
    }

    pub fn category(&self) -> Category {
        self.value.category()
    }

    pub fn value(&self) -> TagValue {
        self.value
    }

    /// Whether `candidate` is present and equal to this tag's value.
    /// Values from different categories are different variants and never match.
    pub fn matches(&self, candidate: Option<&TagValue>) -> bool {
        candidate.is_some_and(|candidate| *candidate == self.value)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, StapleCarb, Taste};
    use std::collections::HashSet;

    #[test]
    fn test_new_tag_takes_category_from_value() {
        let tag = Tag::emoji("和食", "🇯🇵", Genre::Japanese);
        assert_eq!(tag.category(), Category::Genre);
        assert_eq!(tag.value(), TagValue::Genre(Genre::Japanese));
        assert_eq!(tag.icon, Icon::Emoji("🇯🇵".to_string()));
    }

    #[test]
    fn test_with_category_rejects_foreign_value() {
        let result = Tag::with_category(
            "和食",
            Icon::Symbol("fork.knife".to_string()),
            Category::Genre,
            TagValue::StapleCarb(StapleCarb::Rice),
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::CategoryMismatch {
                category: Category::Genre,
                value: TagValue::StapleCarb(StapleCarb::Rice),
            }
        );
    }

    #[test]
    fn test_with_category_accepts_matching_value() {
        let tag = Tag::with_category(
            "がっつり",
            Icon::Emoji("🔥".to_string()),
            Category::Taste,
            TagValue::Taste(Taste::Hearty),
        )
        .unwrap();
        assert_eq!(tag.category(), Category::Taste);
    }

    #[test]
    fn test_matches() {
        let tag = Tag::emoji("和食", "🇯🇵", Genre::Japanese);
        assert!(tag.matches(Some(&TagValue::Genre(Genre::Japanese))));
        assert!(!tag.matches(Some(&TagValue::Genre(Genre::Western))));
        assert!(!tag.matches(None));
    }

    #[test]
    fn test_matches_never_crosses_domains() {
        let tag = Tag::emoji("その他", "🍽️", Genre::Other);
        assert!(!tag.matches(Some(&TagValue::StapleCarb(StapleCarb::Other))));
    }

    #[test]
    fn test_equality_is_by_identity() {
        let first = Tag::emoji("和食", "🇯🇵", Genre::Japanese);
        let second = Tag::emoji("和食", "🇯🇵", Genre::Japanese);
        assert_ne!(first, second);
        assert_eq!(first, first.clone());

        let set: HashSet<Tag> = [first.clone(), second, first].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
