//! HTTP surface: the trip form and the itinerary generation endpoint

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::error::PlannerError;
use crate::gemini::GenerativeModel;
use crate::models::trip::DEFAULT_DAYS;
use crate::models::{Budget, TravelStyle, TripRequest};
use crate::prompt::build_prompt;
use crate::render::{self, ItineraryOutcome};

/// Shared handler state; the model client is injected so tests can
/// substitute a fake
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn GenerativeModel>,
}

/// Form payload for `POST /plan`. The whole bundle becomes available
/// atomically on submit; unchecked boxes simply send no `styles` keys.
#[derive(Debug, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    destination: String,
    #[serde(default = "default_days")]
    days: u32,
    budget: Budget,
    #[serde(default)]
    styles: Vec<TravelStyle>,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

impl From<TripForm> for TripRequest {
    fn from(form: TripForm) -> Self {
        Self {
            destination: form.destination,
            days: form.days,
            budget: form.budget,
            styles: form.styles,
        }
    }
}

pub fn router(model: Arc<dyn GenerativeModel>) -> Router {
    Router::new()
        .route("/", get(show_form))
        .route("/plan", post(create_plan))
        .with_state(AppState { model })
}

async fn show_form() -> Html<String> {
    Html(render::form_page())
}

/// One submission, one model call: validate, build the prompt, call the
/// model, render whichever outcome came back.
async fn create_plan(State(state): State<AppState>, Form(form): Form<TripForm>) -> Response {
    let request = TripRequest::from(form);

    if let Err(e) = request.validate() {
        tracing::warn!("Rejected trip submission: {}", e);
        return Html(render::warning_page(&e.user_message())).into_response();
    }

    let prompt = build_prompt(&request);

    let raw = match state.model.generate(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Itinerary generation failed: {:#}", e);
            let message = e
                .downcast_ref::<PlannerError>()
                .map(PlannerError::user_message)
                .unwrap_or_else(|| {
                    "Itinerary generation failed. Please try again.".to_string()
                });
            return (StatusCode::BAD_GATEWAY, Html(render::error_page(&message)))
                .into_response();
        }
    };

    match render::parse_response(&raw) {
        ItineraryOutcome::Parsed(itinerary) => {
            Html(render::itinerary_page(&request, &itinerary)).into_response()
        }
        ItineraryOutcome::Unparsed { raw } => {
            Html(render::parse_failure_page(&raw)).into_response()
        }
    }
}

/// Bind and serve until shutdown
pub async fn run(port: u16, model: Arc<dyn GenerativeModel>) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(model)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .layer(RequestBodyLimitLayer::new(16 * 1024));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app)
        .await
        .with_context(|| "Server error")?;
    Ok(())
}
