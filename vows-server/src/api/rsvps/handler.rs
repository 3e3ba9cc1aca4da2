//! RSVP API Handlers

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{GuestDirectory, RSVP_SUCCESS_MESSAGE, RsvpRequest};
use shared::util::now_millis;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::validation::{rejection_error, validation_error};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// POST /api/rsvp - record or update an RSVP
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> AppResult<ApiResponse> {
    let Json(req) = payload.map_err(|e| rejection_error(e, ErrorCode::RsvpMissingFields))?;

    if req.has_missing_fields() {
        return Err(AppError::new(ErrorCode::RsvpMissingFields));
    }
    req.validate().map_err(|e| validation_error(&e, "email"))?;

    let rsvp = state
        .storage
        .upsert_rsvp(req.name.trim(), &req.email, req.meal.trim(), now_millis())
        .map_err(|e| e.into_app_error("An error occurred while saving your RSVP."))?;
    tracing::info!(sequence = rsvp.sequence, "RSVP recorded");

    Ok(ApiResponse::message(RSVP_SUCCESS_MESSAGE))
}

/// GET /api/get-rsvps - guest directory in first-submission order
pub async fn directory(State(state): State<ServerState>) -> AppResult<Json<GuestDirectory>> {
    let names = state
        .storage
        .list_rsvp_names()
        .map_err(|e| e.into_app_error("An error occurred while fetching RSVP data."))?;
    Ok(Json(GuestDirectory { names }))
}
