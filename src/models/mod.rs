use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod dish;
pub mod selection;
pub mod tag;

pub use dish::Dish;
pub use selection::SelectionState;
pub use tag::{Icon, Tag};

/// Errors raised when a model value would violate its own invariants
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Tag value {value} does not belong to category {category}")]
    CategoryMismatch { category: Category, value: TagValue },

    #[error("Dish '{dish}' has more than one tag for category {category}")]
    DuplicateCategory { dish: String, category: Category },
}

/// One of the fixed preference axes a tag can belong to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StapleCarb,
    Genre,
    MainIngredient,
    Taste,
    Temperature,
}

impl Category {
    /// Order in which categories are laid out when a user picks tags
    pub fn display_order() -> [Category; 5] {
        [
            Category::Taste,
            Category::StapleCarb,
            Category::MainIngredient,
            Category::Genre,
            Category::Temperature,
        ]
    }

    /// Question shown above the tags of this category
    pub fn prompt(&self) -> &'static str {
        match self {
            Category::Taste => "お腹のすき具合は？",
            Category::StapleCarb => "主食はどれ？",
            Category::MainIngredient => "メインは何がいい？",
            Category::Genre => "どんなジャンル？",
            Category::Temperature => "温度は？",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::StapleCarb => "staple_carb",
            Category::Genre => "genre",
            Category::MainIngredient => "main_ingredient",
            Category::Taste => "taste",
            Category::Temperature => "temperature",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StapleCarb {
    Rice,
    Noodle,
    Bread,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Japanese,
    Western,
    Chinese,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MainIngredient {
    Meat,
    Fish,
    Vegetable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Taste {
    Hearty,
    Light,
    Rich,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Hot,
    Cold,
}

/// A category-specific value; the variant fixes the category it belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "category", content = "value", rename_all = "snake_case")]
pub enum TagValue {
    StapleCarb(StapleCarb),
    Genre(Genre),
    MainIngredient(MainIngredient),
    Taste(Taste),
    Temperature(Temperature),
}

impl TagValue {
    /// Category whose value domain this value belongs to
    pub fn category(&self) -> Category {
        match self {
            TagValue::StapleCarb(_) => Category::StapleCarb,
            TagValue::Genre(_) => Category::Genre,
            TagValue::MainIngredient(_) => Category::MainIngredient,
            TagValue::Taste(_) => Category::Taste,
            TagValue::Temperature(_) => Category::Temperature,
        }
    }

    /// Short label used when a dish lists its own tags
    pub fn label(&self) -> &'static str {
        match self {
            TagValue::StapleCarb(StapleCarb::Rice) => "米",
            TagValue::StapleCarb(StapleCarb::Noodle) => "麺",
            TagValue::StapleCarb(StapleCarb::Bread) => "パン",
            TagValue::StapleCarb(StapleCarb::Other) => "その他",
            TagValue::Genre(Genre::Japanese) => "和食",
            TagValue::Genre(Genre::Western) => "洋食",
            TagValue::Genre(Genre::Chinese) => "中華",
            TagValue::Genre(Genre::Other) => "その他",
            TagValue::MainIngredient(MainIngredient::Meat) => "肉",
            TagValue::MainIngredient(MainIngredient::Fish) => "魚",
            TagValue::MainIngredient(MainIngredient::Vegetable) => "野菜",
            TagValue::Taste(Taste::Hearty) => "がっつり",
            TagValue::Taste(Taste::Light) => "あっさり",
            TagValue::Taste(Taste::Rich) => "こってり",
            TagValue::Temperature(Temperature::Hot) => "温かい",
            TagValue::Temperature(Temperature::Cold) => "冷たい",
        }
    }
}

impl Display for TagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.category(), self.label())
    }
}

impl From<StapleCarb> for TagValue {
    fn from(value: StapleCarb) -> Self {
        TagValue::StapleCarb(value)
    }
}

impl From<Genre> for TagValue {
    fn from(value: Genre) -> Self {
        TagValue::Genre(value)
    }
}

impl From<MainIngredient> for TagValue {
    fn from(value: MainIngredient) -> Self {
        TagValue::MainIngredient(value)
    }
}

impl From<Taste> for TagValue {
    fn from(value: Taste) -> Self {
        TagValue::Taste(value)
    }
}

impl From<Temperature> for TagValue {
    fn from(value: Temperature) -> Self {
        TagValue::Temperature(value)
    }
}
