use crate::{
    catalog::Catalog,
    models::{Category, Dish, Genre, TagValue},
};

/// Finds dishes by free-text keywords
///
/// Full-width spaces count as separators. A dish matches when any keyword
/// appears inside its name or equals one of its search keywords.
pub fn search_dishes<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Dish> {
    let normalized = query.replace('\u{3000}', " ");
    let keywords: Vec<&str> = normalized.split_whitespace().collect();

    if keywords.is_empty() {
        return Vec::new();
    }

    let results: Vec<&Dish> = catalog
        .all_dishes()
        .iter()
        .filter(|dish| {
            keywords.iter().any(|keyword| {
                dish.name.contains(keyword) || dish.keywords.iter().any(|k| k == keyword)
            })
        })
        .collect();

    tracing::debug!(query, matches = results.len(), "Dish search finished");
    results
}

/// All dishes of the given genre, in catalog order
pub fn dishes_by_genre(catalog: &Catalog, genre: Genre) -> Vec<&Dish> {
    let wanted = TagValue::Genre(genre);
    catalog
        .all_dishes()
        .iter()
        .filter(|dish| dish.tag_value(Category::Genre) == Some(&wanted))
        .collect()
}
