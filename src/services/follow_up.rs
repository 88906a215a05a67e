use serde::Serialize;

use crate::{
    catalog::Catalog,
    models::{Category, SelectionState, Tag},
};

/// Categories worth a last narrowing question, most useful first
pub const QUESTION_PRIORITY: [Category; 3] =
    [Category::Genre, Category::StapleCarb, Category::MainIngredient];

/// Number of options a follow-up question offers
pub const OPTION_COUNT: usize = 2;

/// Outcome of looking for a last narrowing question
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FollowUp {
    /// Ask the user to pick exactly one of `options`
    Ask { category: Category, options: Vec<Tag> },
    /// Nothing left to ask; go straight to suggestions
    Skip,
}

/// Chooses the follow-up question for the current selections
///
/// The first priority category without a selected tag is asked about, using
/// the first two catalog tags of that category. If no priority category is
/// missing, or the catalog offers fewer than two tags for it, the question is
/// skipped.
pub fn next_question(catalog: &Catalog, state: &SelectionState) -> FollowUp {
    let selected = state.selected_categories();

    let Some(category) = QUESTION_PRIORITY
        .into_iter()
        .find(|category| !selected.contains(category))
    else {
        tracing::debug!("All priority categories answered, skipping follow-up");
        return FollowUp::Skip;
    };

    let options: Vec<Tag> = catalog
        .tags_in(category)
        .into_iter()
        .take(OPTION_COUNT)
        .cloned()
        .collect();

    if options.len() < OPTION_COUNT {
        tracing::debug!(%category, offered = options.len(), "Too few tags to ask about, skipping follow-up");
        return FollowUp::Skip;
    }

    tracing::debug!(%category, "Asking follow-up question");
    FollowUp::Ask { category, options }
}
