use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    routes::AppState,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "Rejected recommendation request body"
        );
        AppError::InvalidInput(rejection.body_text())
    })?;

    let books = request.into_books();
    if books.is_empty() {
        tracing::info!(request_id = %request_id, "No bookmarks supplied");
        return Ok(Json(RecommendationResponse::default()));
    }

    tracing::info!(
        request_id = %request_id,
        bookmarks = books.len(),
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&books).await?;

    tracing::info!(
        request_id = %request_id,
        recommendations = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(RecommendationResponse { recommendations }))
}
