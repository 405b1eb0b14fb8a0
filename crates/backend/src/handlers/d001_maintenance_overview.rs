use axum::extract::State;
use axum::Json;
use contracts::dashboards::d001_maintenance_overview::MaintenanceSummary;

use crate::dashboards::d001_maintenance_overview;
use crate::shared::state::AppState;

/// GET /api/dashboard/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<MaintenanceSummary> {
    Json(d001_maintenance_overview::service::get_summary(&state).await)
}
