use contracts::domain::a001_machine::aggregate::{Machine, MachineId};
use contracts::domain::a002_maintenance_schedule::aggregate::{
    MaintenanceSchedule, MaintenanceScheduleChanges, MaintenanceScheduleDto,
    MaintenanceScheduleId, MaintenanceSchedulePatch,
};
use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::domain::error::ServiceError;
use crate::domain::input::{required_date, required_text};
use crate::shared::state::AppState;

/// Создание обслуживания для существующей машины.
///
/// Имя машины берётся из хранилища в момент создания; дата не может быть
/// раньше сегодняшней. Статус по умолчанию `pending`.
pub async fn create(
    state: &AppState,
    dto: MaintenanceScheduleDto,
) -> Result<MaintenanceSchedule, ServiceError> {
    if dto.machine_id.trim().is_empty() {
        return Err(ServiceError::validation("machineId is required"));
    }
    let machine_id = MachineId::from_string(dto.machine_id.trim()).map_err(ServiceError::Validation)?;
    let scheduled_date = required_date(&dto.scheduled_date, "scheduledDate")?;
    let maintenance_type = dto
        .maintenance_type
        .ok_or_else(|| ServiceError::validation("maintenanceType is required"))?;
    let description = required_text(&dto.description, "description")?;
    let status = dto.status.unwrap_or_default();
    let today = state.today();

    let created = state
        .store
        .insert_schedule_for(machine_id, |machine| {
            let aggregate = MaintenanceSchedule::new_for_insert(
                machine,
                scheduled_date,
                maintenance_type,
                description,
                status,
            );
            aggregate.validate().map_err(ServiceError::Validation)?;
            aggregate
                .validate_not_in_past(today)
                .map_err(ServiceError::Validation)?;
            Ok::<_, ServiceError>(aggregate)
        })
        .await?
        .ok_or_else(|| ServiceError::not_found::<Machine>(machine_id))?;

    tracing::info!(
        collection = MaintenanceSchedule::collection_name(),
        schedule_id = %created.id,
        machine_id = %created.machine_id,
        scheduled_date = %created.scheduled_date,
        maintenance_type = %created.maintenance_type,
        "maintenance scheduled"
    );
    Ok(created)
}

/// Частичное обновление. Проверка "не в прошлом" здесь не применяется:
/// запись может оставаться на прошедшей дате, пока её не закроют.
pub async fn update(
    state: &AppState,
    id: MaintenanceScheduleId,
    patch: MaintenanceSchedulePatch,
) -> Result<MaintenanceSchedule, ServiceError> {
    let changes = MaintenanceScheduleChanges {
        scheduled_date: patch
            .scheduled_date
            .as_deref()
            .map(|v| required_date(v, "scheduledDate"))
            .transpose()?,
        maintenance_type: patch.maintenance_type,
        description: patch
            .description
            .as_deref()
            .map(|v| required_text(v, "description"))
            .transpose()?,
        status: patch.status,
    };

    let updated = state
        .store
        .update_schedule(id, |schedule| {
            schedule.update(changes);
            schedule.validate().map_err(ServiceError::Validation)
        })
        .await?
        .ok_or_else(|| ServiceError::not_found::<MaintenanceSchedule>(id))?;

    tracing::info!(schedule_id = %id, status = %updated.status, "maintenance schedule updated");
    Ok(updated)
}

pub async fn delete(state: &AppState, id: MaintenanceScheduleId) -> Result<(), ServiceError> {
    let removed = state
        .store
        .delete_schedule(id)
        .await
        .ok_or_else(|| ServiceError::not_found::<MaintenanceSchedule>(id))?;

    tracing::info!(schedule_id = %id, machine_id = %removed.machine_id, "maintenance schedule deleted");
    Ok(())
}

pub async fn get_by_id(
    state: &AppState,
    id: MaintenanceScheduleId,
) -> Result<MaintenanceSchedule, ServiceError> {
    state
        .store
        .get_schedule(id)
        .await
        .ok_or_else(|| ServiceError::not_found::<MaintenanceSchedule>(id))
}

pub async fn list_all(state: &AppState) -> Vec<MaintenanceSchedule> {
    state.store.list_schedules().await
}
