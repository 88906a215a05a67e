use crate::models::{Dish, Tag};

/// Number of suggestions mentioned in a shared summary
pub const SHARED_DISH_COUNT: usize = 3;

const SEARCH_ENGINE_URL: &str = "https://www.google.com/search?q=";

/// Text a user can post about their diagnosis result
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSummary {
    tag_names: Vec<String>,
    dish_names: Vec<String>,
}

impl ShareSummary {
    pub fn new(selected_tags: &[Tag], suggestions: &[&Dish]) -> Self {
        Self {
            tag_names: selected_tags.iter().map(|t| t.name.clone()).collect(),
            dish_names: suggestions
                .iter()
                .take(SHARED_DISH_COUNT)
                .map(|d| d.name.clone())
                .collect(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "今日のわたしの気分は…".to_string(),
            format!("【 {} 】", self.tag_names.join(", ")),
            String::new(),
            "アメリちゃんのおすすめはこれだったよ！".to_string(),
        ];
        lines.extend(self.dish_names.iter().map(|name| format!("・{}", name)));
        lines.push(String::new());
        lines.push("#今日のごはんどうする #ごはん診断".to_string());
        lines.join("\n")
    }
}

/// Web search link for recipes of the named dish
pub fn search_url(dish_name: &str) -> String {
    let query = format!("{} レシピ", dish_name);
    format!("{}{}", SEARCH_ENGINE_URL, urlencoding::encode(&query))
}
