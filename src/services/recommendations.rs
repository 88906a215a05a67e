use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    models::{Category, Dish, SelectionState, TagValue},
};

/// Maximum number of dishes a diagnosis returns
pub const MAX_SUGGESTIONS: usize = 5;

/// Flat bonus for a dish the user explicitly asked for
pub const LIKED_BONUS: u32 = 10;

/// A candidate dish together with its preference score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDish<'a> {
    pub dish: &'a Dish,
    pub score: u32,
}

/// Ranks catalog dishes against a user's selections
///
/// Scoring is deterministic. Only the order within a tier of equally
/// scored dishes, and the pick from an unscored pool, depend on the RNG.
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationEngine<'a> {
    /// Creates an engine over the given catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Scores every dish that survives the exclusion filter, in catalog order
    ///
    /// A dish earns one point per category it matches (no matter how many tags
    /// the user picked within that category) plus [`LIKED_BONUS`] if liked.
    pub fn score(&self, state: &SelectionState) -> Vec<ScoredDish<'a>> {
        let excluded: HashSet<Uuid> = state.excluded_dishes.iter().map(|d| d.id).collect();
        let liked: HashSet<Uuid> = state.liked_dishes.iter().map(|d| d.id).collect();

        let mut wanted: HashMap<Category, HashSet<TagValue>> = HashMap::new();
        for tag in &state.selected_tags {
            wanted.entry(tag.category()).or_default().insert(tag.value());
        }

        self.catalog
            .all_dishes()
            .iter()
            .filter(|dish| !excluded.contains(&dish.id))
            .map(|dish| {
                let matched = wanted
                    .iter()
                    .filter(|(category, values)| {
                        dish.tag_value(**category)
                            .is_some_and(|value| values.contains(value))
                    })
                    .count() as u32;

                let bonus = if liked.contains(&dish.id) { LIKED_BONUS } else { 0 };
                let score = matched + bonus;

                if score > 0 {
                    tracing::debug!(dish = %dish.name, matched, bonus, score, "Dish scored");
                }

                ScoredDish { dish, score }
            })
            .collect()
    }

    /// Picks up to [`MAX_SUGGESTIONS`] dishes for the current selections
    ///
    /// With no positive score anywhere, dishes are drawn at random from the
    /// unexcluded pool. Otherwise the top tier comes first in shuffled order,
    /// and only the next distinct positive score may fill the remaining slots.
    #[instrument(skip_all, fields(
        selected_tags = state.selected_tags.len(),
        liked = state.liked_dishes.len(),
        excluded = state.excluded_dishes.len(),
    ))]
    pub fn suggest<R>(&self, state: &SelectionState, rng: &mut R) -> Vec<&'a Dish>
    where
        R: Rng + ?Sized,
    {
        let scored = self.score(state);
        let hits: Vec<ScoredDish<'a>> = scored.iter().copied().filter(|s| s.score > 0).collect();

        let Some(max_score) = hits.iter().map(|s| s.score).max() else {
            tracing::debug!(pool = scored.len(), "No dish scored, drawing at random");
            let mut pool: Vec<&'a Dish> = scored.iter().map(|s| s.dish).collect();
            pool.shuffle(rng);
            pool.truncate(MAX_SUGGESTIONS);
            return pool;
        };

        let mut suggestions = shuffled_tier(&hits, max_score, rng);

        if suggestions.len() < MAX_SUGGESTIONS {
            let next_score = hits
                .iter()
                .map(|s| s.score)
                .filter(|score| *score < max_score)
                .max();

            if let Some(next_score) = next_score {
                let mut filler = shuffled_tier(&hits, next_score, rng);
                filler.truncate(MAX_SUGGESTIONS - suggestions.len());
                suggestions.extend(filler);
            }
        }

        suggestions.truncate(MAX_SUGGESTIONS);

        tracing::debug!(
            hits = hits.len(),
            max_score,
            returned = suggestions.len(),
            "Suggestions selected"
        );

        suggestions
    }
}

/// All dishes scoring exactly `score`, in random order
fn shuffled_tier<'a, R>(hits: &[ScoredDish<'a>], score: u32, rng: &mut R) -> Vec<&'a Dish>
where
    R: Rng + ?Sized,
{
    let mut tier: Vec<&'a Dish> = hits
        .iter()
        .filter(|s| s.score == score)
        .map(|s| s.dish)
        .collect();
    tier.shuffle(rng);
    tier
}
