//! HTTP handlers for the travel application
//!
//! Every route is a fresh read from the managed data store rendered through a
//! page template, or a pass-through call to the managed model service with
//! light prompt formatting and response reshaping.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::ai::{ReviewKnowledgeBase, TextGenerator};
use crate::ai::citations::collate;
use crate::ai::prompt::itinerary_prompt;
use crate::error::AppError;
use crate::models::TripParameters;
use crate::pages;
use crate::store::CityStore;

pub mod relay;

/// Fixed questions offered on the city detail page. The Q&A form submits an
/// index into this list, never free text.
pub const KB_PROMPTS: [&str; 4] = [
    "What activities are popular in the reviews?",
    "What food do the reviews recommend?",
    "What did reviewers like the most?",
    "What are the recommended neighborhoods?",
];

/// Shared handler state: the data store plus the two model-service seams.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CityStore>,
    pub generator: Arc<dyn TextGenerator>,
    pub knowledge_base: Arc<dyn ReviewKnowledgeBase>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/city/{name}", get(city_detail))
        .route("/suggestions/{name}", post(suggestions))
        .route("/kb/{name}", post(kb_query))
        .with_state(state)
}

#[instrument(skip(state))]
async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let cities = state.store.list_cities().await?;
    Ok(Html(pages::index_page(&cities)))
}

#[instrument(skip(state))]
async fn city_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    let city = state
        .store
        .get_city(&name)
        .await?
        .ok_or_else(|| AppError::unknown_city(&name))?;
    let reviews = state.store.list_reviews(&city.name).await?;

    Ok(Html(pages::city_page(&city, &reviews, &KB_PROMPTS)))
}

/// Trip parameters as submitted by the suggestion form. Checkbox fields
/// arrive as present-or-absent; `interests` may repeat.
#[derive(Debug, Deserialize)]
struct SuggestionForm {
    days: Option<String>,
    children: Option<String>,
    car: Option<String>,
    #[serde(default)]
    interests: Vec<String>,
}

impl From<SuggestionForm> for TripParameters {
    fn from(form: SuggestionForm) -> Self {
        TripParameters {
            days: form.days,
            children: form.children.is_some(),
            car: form.car.is_some(),
            interests: form.interests,
        }
    }
}

#[instrument(skip(state, form))]
async fn suggestions(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<SuggestionForm>,
) -> Result<Response, AppError> {
    let city = state
        .store
        .get_city(&name)
        .await?
        .ok_or_else(|| AppError::unknown_city(&name))?;

    let parameters = TripParameters::from(form);
    let prompt = itinerary_prompt(&city, &parameters);
    tracing::info!("Streaming itinerary suggestions for {}", city.name);

    let fragments = state.generator.stream_text(&prompt).await?;
    let body = relay::relay_body(&prompt, fragments);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct KbForm {
    /// Index into [`KB_PROMPTS`]
    q: usize,
}

#[derive(Debug, Serialize)]
struct KbResponse {
    #[serde(rename = "Output")]
    output: String,
    #[serde(rename = "Reviews")]
    reviews: Vec<String>,
}

#[instrument(skip(state))]
async fn kb_query(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(form): Form<KbForm>,
) -> Result<Json<KbResponse>, AppError> {
    let city = state
        .store
        .get_city(&name)
        .await?
        .ok_or_else(|| AppError::unknown_city(&name))?;

    let question = KB_PROMPTS
        .get(form.q)
        .ok_or_else(|| AppError::BadRequest(format!("No knowledge base question {}", form.q)))?;

    let citations = state.knowledge_base.ask(&city.name, question).await?;
    let answer = collate(&citations);

    Ok(Json(KbResponse {
        output: answer.output,
        reviews: answer.reviews,
    }))
}
