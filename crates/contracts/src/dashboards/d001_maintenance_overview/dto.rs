use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::a001_machine::aggregate::Machine;
use crate::domain::a002_maintenance_schedule::aggregate::MaintenanceSchedule;
use crate::shared::maintenance::{MaintenanceStatus, StatusPresentation};

/// Сколько ближайших обслуживаний показывать на дашборде
pub const UPCOMING_LIMIT: usize = 5;

/// Ответ дашборда обзора обслуживания
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSummary {
    /// Дата, на которую рассчитаны статусы
    pub as_of: NaiveDate,
    pub total_machines: usize,
    pub up_to_date: usize,
    pub due_soon: usize,
    pub overdue: usize,
    /// Машины в рабочем состоянии (`operational`)
    pub operational: usize,
    /// Ожидающие обслуживания, ближайшие первыми, не больше [`UPCOMING_LIMIT`]
    pub upcoming: Vec<MaintenanceSchedule>,
}

/// Машина с рассчитанным статусом обслуживания и данными для отображения
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatusRow {
    #[serde(flatten)]
    pub machine: Machine,
    /// Подпись рабочего состояния машины ("Operacional", "Detenida", ...)
    pub status_label: &'static str,
    pub maintenance_status: MaintenanceStatus,
    pub presentation: StatusPresentation,
}
