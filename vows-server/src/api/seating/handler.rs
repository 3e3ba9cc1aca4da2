//! Seating chart API Handlers

use std::collections::HashSet;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{
    CanvasChartResponse, ListChartResponse, PositionedTable, SAVE_SUCCESS_MESSAGE,
    SaveChartRequest, SimpleTable, TABLE_COUNT,
};
use shared::seating::{CanvasPartition, Location};

use crate::core::ServerState;
use crate::utils::validation::rejection_error;
use crate::utils::{ApiResponse, AppResult, ErrorCode};

const FETCH_FAILED: &str = "An error occurred while fetching seating chart data.";
const SAVE_FAILED: &str = "An error occurred while saving the seating chart.";

/// GET /api/get-seating-chart - list chart plus the names already seated
pub async fn get_list_chart(State(state): State<ServerState>) -> AppResult<Json<ListChartResponse>> {
    let tables = state
        .storage
        .load_list_chart(TABLE_COUNT)
        .map_err(|e| e.into_app_error(FETCH_FAILED))?;

    let seated_guests: Vec<String> = {
        let mut seen = HashSet::new();
        tables
            .iter()
            .flat_map(|t| t.guests.iter())
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    };

    Ok(Json(ListChartResponse {
        tables,
        seated_guests,
    }))
}

/// POST /api/save-seating-chart - replace the list chart
///
/// Capacity is enforced by the editor, not here.
pub async fn save_list_chart(
    State(state): State<ServerState>,
    payload: Result<Json<SaveChartRequest<SimpleTable>>, JsonRejection>,
) -> AppResult<ApiResponse> {
    let Json(req) = payload.map_err(|e| rejection_error(e, ErrorCode::InvalidTablesPayload))?;

    state
        .storage
        .replace_list_chart(&req.tables)
        .map_err(|e| e.into_app_error(SAVE_FAILED))?;
    tracing::info!(tables = req.tables.len(), "List seating chart saved");

    Ok(ApiResponse::message(SAVE_SUCCESS_MESSAGE))
}

/// GET /api/get-seating-chart-2 - canvas chart plus the unseated names
pub async fn get_canvas_chart(
    State(state): State<ServerState>,
) -> AppResult<Json<CanvasChartResponse>> {
    let directory = state
        .storage
        .list_rsvp_names()
        .map_err(|e| e.into_app_error(FETCH_FAILED))?;
    let tables = state
        .storage
        .load_canvas_chart(TABLE_COUNT)
        .map_err(|e| e.into_app_error(FETCH_FAILED))?;

    let chart = CanvasPartition::initialize(&directory, tables);
    let names = chart
        .names_at(Location::Pool)?
        .into_iter()
        .map(String::from)
        .collect();

    Ok(Json(CanvasChartResponse {
        tables: chart.serialize(),
        names,
    }))
}

/// POST /api/save-seating-chart-2 - replace the canvas chart
pub async fn save_canvas_chart(
    State(state): State<ServerState>,
    payload: Result<Json<SaveChartRequest<PositionedTable>>, JsonRejection>,
) -> AppResult<ApiResponse> {
    let Json(req) = payload.map_err(|e| rejection_error(e, ErrorCode::InvalidTablesPayload))?;

    state
        .storage
        .replace_canvas_chart(&req.tables)
        .map_err(|e| e.into_app_error(SAVE_FAILED))?;
    tracing::info!(tables = req.tables.len(), "Canvas seating chart saved");

    Ok(ApiResponse::message(SAVE_SUCCESS_MESSAGE))
}
