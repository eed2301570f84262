use std::collections::BTreeMap;

use activities::Activity;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_activities))
        .route("/:activity_name/signup", post(sign_up))
        .route("/:activity_name/unregister", delete(unregister))
}

#[instrument(name = "GET /activities", skip(app_state))]
async fn get_activities(State(app_state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(app_state.activities().await)
}

#[derive(Debug, Deserialize)]
struct ParticipantBody {
    email: String,
}

#[derive(Debug, Serialize)]
struct ConfirmationResponse {
    message: String,
}

#[instrument(
    name = "POST /activities/:activity_name/signup",
    skip(app_state, body),
    fields(email = %body.email)
)]
async fn sign_up(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Json(body): Json<ParticipantBody>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    app_state.sign_up(&activity_name, &body.email).await?;

    Ok(Json(ConfirmationResponse {
        message: format!("Signed up {} for {}", body.email, activity_name),
    }))
}

#[instrument(
    name = "DELETE /activities/:activity_name/unregister",
    skip(app_state, body),
    fields(email = %body.email)
)]
async fn unregister(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    Json(body): Json<ParticipantBody>,
) -> Result<Json<ConfirmationResponse>, ApiError> {
    app_state.unregister(&activity_name, &body.email).await?;

    Ok(Json(ConfirmationResponse {
        message: format!("Unregistered {} from {}", body.email, activity_name),
    }))
}
