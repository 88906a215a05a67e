use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::models::SelectionState;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// The single diagnosis session and the randomness its suggestions draw on
pub struct AppStateInner {
    pub session: SelectionState,
    pub rng: StdRng,
    /// Dishes most recently suggested to the user, in the order shown
    pub last_suggestions: Vec<Uuid>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin(), None)
    }
}

impl AppState {
    /// Creates state with an empty session over `catalog`.
    /// A seed makes suggestion shuffling reproducible.
    pub fn new(catalog: Catalog, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog: Arc::new(catalog),
            inner: Arc::new(RwLock::new(AppStateInner {
                session: SelectionState::new(),
                rng,
                last_suggestions: Vec::new(),
            })),
        }
    }
}
