use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_maintenance_schedule::aggregate::{
    MaintenanceSchedule, MaintenanceScheduleDto, MaintenanceScheduleId, MaintenanceSchedulePatch,
};

use super::{parse_id, ApiError, ApiJson};
use crate::domain::a002_maintenance_schedule;
use crate::shared::state::AppState;

/// GET /api/maintenanceSchedules
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<MaintenanceSchedule>> {
    Json(a002_maintenance_schedule::service::list_all(&state).await)
}

/// GET /api/maintenanceSchedules/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MaintenanceSchedule>, ApiError> {
    let id: MaintenanceScheduleId = parse_id(&id)?;
    let schedule = a002_maintenance_schedule::service::get_by_id(&state, id).await?;
    Ok(Json(schedule))
}

/// POST /api/maintenanceSchedules
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<MaintenanceScheduleDto>,
) -> Result<(StatusCode, Json<MaintenanceSchedule>), ApiError> {
    let schedule = a002_maintenance_schedule::service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// PUT /api/maintenanceSchedules/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<MaintenanceSchedulePatch>,
) -> Result<Json<MaintenanceSchedule>, ApiError> {
    let id: MaintenanceScheduleId = parse_id(&id)?;
    let schedule = a002_maintenance_schedule::service::update(&state, id, patch).await?;
    Ok(Json(schedule))
}

/// DELETE /api/maintenanceSchedules/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: MaintenanceScheduleId = parse_id(&id)?;
    a002_maintenance_schedule::service::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
