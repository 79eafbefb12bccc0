use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::catalog::{CatalogError, CatalogRepository, ProfileStore};
use super::domain::{QuestionnaireAnswers, UserId};
use super::service::{MatchingService, MatchingServiceError};

/// Header set by the upstream auth layer when the caller is authenticated.
const USER_ID_HEADER: &str = "x-user-id";

/// Router builder exposing the scoring endpoint.
pub fn matching_router<C, P>(service: Arc<MatchingService<C, P>>) -> Router
where
    C: CatalogRepository + 'static,
    P: ProfileStore + 'static,
{
    Router::new()
        .route("/api/v1/matches", post(match_handler::<C, P>))
        .with_state(service)
}

pub(crate) async fn match_handler<C, P>(
    State(service): State<Arc<MatchingService<C, P>>>,
    headers: HeaderMap,
    axum::Json(answers): axum::Json<QuestionnaireAnswers>,
) -> Response
where
    C: CatalogRepository + 'static,
    P: ProfileStore + 'static,
{
    let caller = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| UserId(value.to_string()));

    match service.evaluate(&answers, caller.as_ref()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(MatchingServiceError::Catalog(CatalogError::Unavailable(detail))) => {
            let payload = json!({
                "error": format!("catalog store unavailable: {detail}"),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
