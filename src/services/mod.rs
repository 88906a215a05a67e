pub mod follow_up;
pub mod recommendations;
pub mod search;
pub mod share;

pub use follow_up::{next_question, FollowUp};
pub use recommendations::{RecommendationEngine, ScoredDish, MAX_SUGGESTIONS};
pub use search::{dishes_by_genre, search_dishes};
pub use share::{search_url, ShareSummary};
