use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Category, Dish, Genre, SelectionState, Tag, TagValue};
use crate::services::{
    dishes_by_genre, next_question, search_dishes, search_url, FollowUp, RecommendationEngine,
    ShareSummary,
};

use super::state::AppStateInner;
use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct DishSelectionRequest {
    pub dish_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct FollowUpAnswerRequest {
    pub tag_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct DishResponse {
    pub id: Uuid,
    pub name: String,
    pub keywords: Vec<String>,
    pub tags: Vec<TagValue>,
    pub search_url: String,
}

impl From<&Dish> for DishResponse {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name.clone(),
            keywords: dish.keywords.clone(),
            tags: dish.tags.values().copied().collect(),
            search_url: search_url(&dish.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub liked_dishes: Vec<DishResponse>,
    pub excluded_dishes: Vec<DishResponse>,
    pub selected_tags: Vec<Tag>,
}

impl From<&SelectionState> for SessionResponse {
    fn from(session: &SelectionState) -> Self {
        Self {
            liked_dishes: session.liked_dishes.iter().map(DishResponse::from).collect(),
            excluded_dishes: session.excluded_dishes.iter().map(DishResponse::from).collect(),
            selected_tags: session.selected_tags.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub dishes: Vec<DishResponse>,
}

#[derive(Debug, Serialize)]
pub struct ToggleTagResponse {
    pub tag_id: Uuid,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FollowUpResponse {
    Question {
        category: Category,
        prompt: &'static str,
        options: Vec<Tag>,
    },
    Suggestions {
        dishes: Vec<DishResponse>,
    },
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub text: String,
    pub dishes: Vec<DishResponse>,
}

/// Runs the engine against the session, advancing the shared RNG and
/// remembering what was shown
fn suggest<'a>(state: &'a AppState, inner: &mut AppStateInner) -> Vec<&'a Dish> {
    let AppStateInner {
        session,
        rng,
        last_suggestions,
    } = inner;
    let dishes = RecommendationEngine::new(&state.catalog).suggest(session, rng);
    *last_suggestions = dishes.iter().map(|d| d.id).collect();

    tracing::info!(
        selected_tags = session.selected_tags.len(),
        suggested = dishes.len(),
        "Suggestions computed"
    );

    dishes
}

fn suggest_responses(state: &AppState, inner: &mut AppStateInner) -> Vec<DishResponse> {
    suggest(state, inner)
        .into_iter()
        .map(DishResponse::from)
        .collect()
}

fn catalog_dish(state: &AppState, dish_id: &Uuid) -> AppResult<Dish> {
    state
        .catalog
        .dish(dish_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Dish {}", dish_id)))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the whole dish catalog
pub async fn get_dishes(State(state): State<AppState>) -> Json<Vec<DishResponse>> {
    Json(state.catalog.all_dishes().iter().map(DishResponse::from).collect())
}

/// Search dishes by keywords
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<DishResponse>> {
    let dishes = search_dishes(&state.catalog, &params.q);
    Json(dishes.into_iter().map(DishResponse::from).collect())
}

/// Browse dishes of one genre
pub async fn get_dishes_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<Genre>,
) -> Json<Vec<DishResponse>> {
    let dishes = dishes_by_genre(&state.catalog, genre);
    Json(dishes.into_iter().map(DishResponse::from).collect())
}

/// Get all selectable tags, grouped by category in display order
pub async fn get_tags(State(state): State<AppState>) -> Json<Vec<Tag>> {
    Json(state.catalog.tags_in_display_order().into_iter().cloned().collect())
}

/// Get the current session selections
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let inner = state.inner.read().await;
    Json(SessionResponse::from(&inner.session))
}

/// Start over with an empty session
pub async fn reset_session(State(state): State<AppState>) -> StatusCode {
    let mut inner = state.inner.write().await;
    inner.session.reset();
    inner.last_suggestions.clear();
    tracing::info!("Session reset");
    StatusCode::NO_CONTENT
}

/// Add a dish the user wants to eat
pub async fn add_liked(
    State(state): State<AppState>,
    Json(request): Json<DishSelectionRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let dish = catalog_dish(&state, &request.dish_id)?;
    let mut inner = state.inner.write().await;
    let added = inner.session.add_liked(dish);
    tracing::info!(dish_id = %request.dish_id, added, "Liked dish");

    let status = if added { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(SessionResponse::from(&inner.session))))
}

/// Remove a liked dish
pub async fn remove_liked(
    State(state): State<AppState>,
    Path(dish_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if !inner.session.remove_liked(&dish_id) {
        return Err(AppError::NotFound(format!("Liked dish {}", dish_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Add a dish the user refuses to eat
pub async fn add_excluded(
    State(state): State<AppState>,
    Json(request): Json<DishSelectionRequest>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let dish = catalog_dish(&state, &request.dish_id)?;
    let mut inner = state.inner.write().await;
    let added = inner.session.add_excluded(dish);
    tracing::info!(dish_id = %request.dish_id, added, "Excluded dish");

    let status = if added { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(SessionResponse::from(&inner.session))))
}

/// Remove an excluded dish
pub async fn remove_excluded(
    State(state): State<AppState>,
    Path(dish_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if !inner.session.remove_excluded(&dish_id) {
        return Err(AppError::NotFound(format!("Excluded dish {}", dish_id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Select or deselect a preference tag
pub async fn toggle_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
) -> AppResult<Json<ToggleTagResponse>> {
    let tag = state
        .catalog
        .tag(&tag_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Tag {}", tag_id)))?;

    let mut inner = state.inner.write().await;
    let selected = inner.session.toggle_tag(tag);
    tracing::info!(tag_id = %tag_id, selected, "Toggled tag");

    Ok(Json(ToggleTagResponse { tag_id, selected }))
}

/// Ask the last narrowing question, or go straight to suggestions
pub async fn get_follow_up(State(state): State<AppState>) -> Json<FollowUpResponse> {
    let mut inner = state.inner.write().await;

    match next_question(&state.catalog, &inner.session) {
        FollowUp::Ask { category, options } => Json(FollowUpResponse::Question {
            category,
            prompt: category.prompt(),
            options,
        }),
        FollowUp::Skip => Json(FollowUpResponse::Suggestions {
            dishes: suggest_responses(&state, &mut inner),
        }),
    }
}

/// Record the answer to the follow-up question and return suggestions
pub async fn answer_follow_up(
    State(state): State<AppState>,
    Json(request): Json<FollowUpAnswerRequest>,
) -> AppResult<Json<SuggestionsResponse>> {
    let mut inner = state.inner.write().await;

    let answer = match next_question(&state.catalog, &inner.session) {
        FollowUp::Ask { options, .. } => options.into_iter().find(|t| t.id == request.tag_id),
        FollowUp::Skip => None,
    };

    let Some(tag) = answer else {
        return Err(AppError::InvalidInput(format!(
            "Tag {} is not an option of the current question",
            request.tag_id
        )));
    };

    inner.session.select_tag(tag);
    Ok(Json(SuggestionsResponse {
        dishes: suggest_responses(&state, &mut inner),
    }))
}

/// Compute suggestions for the current session
pub async fn get_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    let mut inner = state.inner.write().await;
    Json(SuggestionsResponse {
        dishes: suggest_responses(&state, &mut inner),
    })
}

/// Build a shareable summary of the selected tags and the suggestions last shown.
/// Suggestions are computed first if none have been shown yet.
pub async fn get_share(State(state): State<AppState>) -> Json<ShareResponse> {
    let mut inner = state.inner.write().await;

    let dishes: Vec<&Dish> = if inner.last_suggestions.is_empty() {
        suggest(&state, &mut inner)
    } else {
        inner
            .last_suggestions
            .iter()
            .filter_map(|id| state.catalog.dish(id))
            .collect()
    };
    let text = ShareSummary::new(&inner.session.selected_tags, &dishes).to_text();

    Json(ShareResponse {
        text,
        dishes: dishes.into_iter().map(DishResponse::from).collect(),
    })
}
