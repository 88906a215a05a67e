use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{
    Category, Genre, MainIngredient, ModelError, StapleCarb, TagValue, Taste, Temperature,
};

/// A recommendable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    /// Unique identifier for the dish
    pub id: Uuid,
    /// Display name (e.g., "カレーライス")
    pub name: String,
    /// Extra words the dish can be found by
    pub keywords: Vec<String>,
    /// At most one value per category; a missing category means "no opinion"
    pub tags: BTreeMap<Category, TagValue>,
}

impl Dish {
    /// Creates a dish, rejecting a second value for a category that is already tagged
    pub fn new<K, V>(name: impl Into<String>, keywords: K, values: V) -> Result<Self, ModelError>
    where
        K: IntoIterator,
        K::Item: Into<String>,
        V: IntoIterator<Item = TagValue>,
    {
        let name = name.into();
        let mut tags = BTreeMap::new();
        for value in values {
            if tags.insert(value.category(), value).is_some() {
                return Err(ModelError::DuplicateCategory {
                    dish: name,
                    category: value.category(),
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            keywords: keywords.into_iter().map(Into::into).collect(),
            tags,
        })
    }

    /// Creates a dish tagged on every category
    pub fn fully_tagged(
        name: impl Into<String>,
        keywords: &[&str],
        staple_carb: StapleCarb,
        genre: Genre,
        main_ingredient: MainIngredient,
        taste: Taste,
        temperature: Temperature,
    ) -> Self {
        let tags = [
            TagValue::from(staple_carb),
            TagValue::from(genre),
            TagValue::from(main_ingredient),
            TagValue::from(taste),
            TagValue::from(temperature),
        ]
        .into_iter()
        .map(|value| (value.category(), value))
        .collect();

        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            tags,
        }
    }

    /// The dish's value for `category`, if it has one
    pub fn tag_value(&self, category: Category) -> Option<&TagValue> {
        self.tags.get(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dish() {
        let dish = Dish::new(
            "ざるそば",
            ["そば", "蕎麦"],
            [
                TagValue::from(StapleCarb::Noodle),
                TagValue::from(Genre::Japanese),
                TagValue::from(Temperature::Cold),
            ],
        )
        .unwrap();

        assert_eq!(dish.name, "ざるそば");
        assert_eq!(dish.keywords, vec!["そば", "蕎麦"]);
        assert_eq!(
            dish.tag_value(Category::StapleCarb),
            Some(&TagValue::StapleCarb(StapleCarb::Noodle))
        );
        assert_eq!(dish.tag_value(Category::Taste), None);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let result = Dish::new(
            "謎の料理",
            Vec::<String>::new(),
            [TagValue::from(Genre::Japanese), TagValue::from(Genre::Western)],
        );
        assert_eq!(
            result.unwrap_err(),
            ModelError::DuplicateCategory {
                dish: "謎の料理".to_string(),
                category: Category::Genre,
            }
        );
    }

    #[test]
    fn test_fully_tagged_dish_has_every_category() {
        let dish = Dish::fully_tagged(
            "親子丼",
            &["丼", "鶏肉"],
            StapleCarb::Rice,
            Genre::Japanese,
            MainIngredient::Meat,
            Taste::Hearty,
            Temperature::Hot,
        );
        assert_eq!(dish.tags.len(), 5);
        assert_eq!(
            dish.tag_value(Category::Taste),
            Some(&TagValue::Taste(Taste::Hearty))
        );
    }

    #[test]
    fn test_dish_ids_are_unique() {
        let a = Dish::new("おにぎり", ["おむすび"], Vec::<TagValue>::new()).unwrap();
        let b = Dish::new("おにぎり", ["おむすび"], Vec::<TagValue>::new()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
