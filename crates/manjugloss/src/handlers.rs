use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use manju_annotate::annotate_text;
use manju_dict::DictionarySlot;
use manju_types::{LineItem, Match};

const MAX_TEXT_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub dictionaries: Arc<Vec<DictionarySlot>>,
}

#[derive(Deserialize)]
pub struct AnnotateRequest {
    pub text: String,
}

#[derive(Serialize)]
struct AnnotateResponse<'a> {
    dictionaries: Vec<DictionaryResult<'a>>,
}

/// One dictionary's contribution to a submission.
///
/// An unavailable dictionary keeps its slot in the response so consumers can
/// show "dictionary unavailable" instead of a silent zero-match column.
#[derive(Serialize)]
struct DictionaryResult<'a> {
    label: &'a str,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    lines: Vec<Vec<LineItem<'a>>>,
    matches: Vec<Match<'a>>,
}

#[derive(Serialize)]
struct DictionaryStatus<'a> {
    label: &'a str,
    available: bool,
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/annotate", post(annotate))
        .route("/v1/dictionaries", get(dictionaries))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn dictionaries(State(state): State<AppState>) -> Response {
    let statuses: Vec<DictionaryStatus<'_>> = state
        .dictionaries
        .iter()
        .map(|slot| DictionaryStatus {
            label: slot.label(),
            available: slot.dictionary().is_some(),
            entries: slot.dictionary().map_or(0, |dict| dict.len()),
            error: slot.error().map(|err| err.to_string()),
        })
        .collect();
    Json(statuses).into_response()
}

async fn annotate(
    State(state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Response, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }
    if request.text.len() > MAX_TEXT_BYTES {
        return Err(ApiError::bad_request(format!(
            "text must be at most {MAX_TEXT_BYTES} bytes"
        )));
    }

    // Each dictionary is queried independently against the same text; an
    // absent slot is reported, never silently skipped.
    let results: Vec<DictionaryResult<'_>> = state
        .dictionaries
        .iter()
        .map(|slot| match slot.dictionary() {
            Some(dict) => {
                let annotated = annotate_text(&request.text, dict);
                DictionaryResult {
                    label: slot.label(),
                    available: true,
                    error: None,
                    lines: annotated.lines,
                    matches: annotated.matches,
                }
            }
            None => DictionaryResult {
                label: slot.label(),
                available: false,
                error: slot.error().map(|err| err.to_string()),
                lines: Vec::new(),
                matches: Vec::new(),
            },
        })
        .collect();

    Ok(Json(AnnotateResponse {
        dictionaries: results,
    })
    .into_response())
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
