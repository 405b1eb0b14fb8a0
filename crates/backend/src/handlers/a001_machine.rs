use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d001_maintenance_overview::MachineStatusRow;
use contracts::domain::a001_machine::aggregate::{Machine, MachineDto, MachineId, MachinePatch};

use super::{parse_id, ApiError, ApiJson};
use crate::domain::a001_machine;
use crate::shared::state::AppState;

/// GET /api/machines
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Machine>> {
    Json(a001_machine::service::list_all(&state).await)
}

/// GET /api/machines/status
pub async fn list_with_status(State(state): State<AppState>) -> Json<Vec<MachineStatusRow>> {
    Json(a001_machine::service::list_with_status(&state).await)
}

/// GET /api/machines/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Machine>, ApiError> {
    let id: MachineId = parse_id(&id)?;
    let machine = a001_machine::service::get_by_id(&state, id).await?;
    Ok(Json(machine))
}

/// POST /api/machines
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<MachineDto>,
) -> Result<(StatusCode, Json<Machine>), ApiError> {
    let machine = a001_machine::service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(machine)))
}

/// PUT /api/machines/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<MachinePatch>,
) -> Result<Json<Machine>, ApiError> {
    let id: MachineId = parse_id(&id)?;
    let machine = a001_machine::service::update(&state, id, patch).await?;
    Ok(Json(machine))
}

/// DELETE /api/machines/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: MachineId = parse_id(&id)?;
    a001_machine::service::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/machines/testdata
pub async fn insert_test_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<Machine>>, ApiError> {
    let created = a001_machine::service::insert_test_data(&state).await?;
    Ok(Json(created))
}
