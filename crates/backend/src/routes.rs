use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Machine handlers
        .route(
            "/api/machines",
            get(handlers::a001_machine::list_all).post(handlers::a001_machine::create),
        )
        .route(
            "/api/machines/status",
            get(handlers::a001_machine::list_with_status),
        )
        .route(
            "/api/machines/testdata",
            post(handlers::a001_machine::insert_test_data),
        )
        .route(
            "/api/machines/:id",
            get(handlers::a001_machine::get_by_id)
                .put(handlers::a001_machine::update)
                .delete(handlers::a001_machine::delete),
        )
        // A002 Maintenance schedule handlers
        .route(
            "/api/maintenanceSchedules",
            get(handlers::a002_maintenance_schedule::list_all)
                .post(handlers::a002_maintenance_schedule::create),
        )
        .route(
            "/api/maintenanceSchedules/:id",
            get(handlers::a002_maintenance_schedule::get_by_id)
                .put(handlers::a002_maintenance_schedule::update)
                .delete(handlers::a002_maintenance_schedule::delete),
        )
        // D001 Maintenance overview dashboard
        .route(
            "/api/dashboard/summary",
            get(handlers::d001_maintenance_overview::get_summary),
        )
        .with_state(state)
}
