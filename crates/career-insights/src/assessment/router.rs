use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSubmission, Locale};
use super::import::answers_from_csv_reader;
use super::service::AssessmentService;
use super::store::{ProfileId, ProfileStore};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

fn locale_from(raw: Option<&str>) -> Locale {
    raw.map(Locale::parse).unwrap_or_default()
}

/// Router exposing question delivery and result submission.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessment/roles", get(roles_handler::<S>))
        .route("/api/v1/assessment/results", post(results_handler::<S>))
        .route("/api/v1/assessment/results/csv", post(csv_results_handler::<S>))
        .route(
            "/api/v1/assessment/results/:profile_id/persistence",
            get(persistence_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Query(query): Query<QuestionQuery>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let locale = locale_from(query.locale.as_deref());
    let questions = service.questions(query.role.as_deref(), locale);
    (StatusCode::OK, Json(questions)).into_response()
}

pub(crate) async fn roles_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let locale = locale_from(query.locale.as_deref());
    (StatusCode::OK, Json(service.roles(locale))).into_response()
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Json(submission): Json<AssessmentSubmission>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let (receipt, _detached) = service.submit(submission);
    (StatusCode::OK, Json(receipt)).into_response()
}

/// Accepts a `question_id,option_id` answer sheet as the request body.
pub(crate) async fn csv_results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Query(query): Query<QuestionQuery>,
    body: String,
) -> Result<Response, AppError>
where
    S: ProfileStore + 'static,
{
    let answers = answers_from_csv_reader(body.as_bytes())?;
    let submission = AssessmentSubmission {
        answers,
        locale: locale_from(query.locale.as_deref()),
        role_id: query.role,
    };
    let (receipt, _detached) = service.submit(submission);
    Ok((StatusCode::OK, Json(receipt)).into_response())
}

pub(crate) async fn persistence_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.persistence_status(&ProfileId(profile_id)) {
        Some(status) => (StatusCode::OK, Json(status)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "unknown profile" })),
        )
            .into_response(),
    }
}
