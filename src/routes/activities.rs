// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and participant signup routes.

use crate::error::{AppError, Result};
use crate::models::{Activities, MessageResponse};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

/// Longest address accepted (RFC 5321 path limit).
const MAX_EMAIL_LEN: u64 = 254;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", post(unregister))
}

/// Raw query-string pairs; repeated keys are kept in order.
type QueryPairs = Vec<(String, String)>;

/// Query extractor outcome; rejections are turned into `{detail}` errors.
type EmailQuery = std::result::Result<Query<QueryPairs>, QueryRejection>;

#[derive(Validate)]
struct ParticipantEmail {
    #[validate(length(max = MAX_EMAIL_LEN))]
    email: String,
}

/// Pull the participant email out of the query string.
///
/// The last `email` value wins when the key is repeated. The address is
/// passed through as given, including an empty one.
fn parse_email(query: EmailQuery) -> Result<String> {
    let Query(pairs) = query.map_err(|rejection| AppError::Unprocessable(rejection.body_text()))?;

    let email = pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .ok_or_else(|| {
            AppError::Unprocessable("Missing required query parameter: email".to_string())
        })?;

    let participant = ParticipantEmail { email };
    participant.validate().map_err(|_| {
        AppError::Unprocessable(format!("email must be at most {MAX_EMAIL_LEN} characters"))
    })?;

    Ok(participant.email)
}

/// List every activity with its participants.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Activities> {
    Json(state.signup_service.list_activities().await)
}

/// Sign a participant up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: EmailQuery,
) -> Result<Json<MessageResponse>> {
    let email = parse_email(query)?;
    let message = state.signup_service.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

/// Remove a participant from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: EmailQuery,
) -> Result<Json<MessageResponse>> {
    let email = parse_email(query)?;
    let message = state
        .signup_service
        .unregister(&activity_name, &email)
        .await?;
    Ok(Json(MessageResponse { message }))
}
