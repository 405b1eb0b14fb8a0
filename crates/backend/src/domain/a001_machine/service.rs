use chrono::Days;
use contracts::dashboards::d001_maintenance_overview::MachineStatusRow;
use contracts::domain::a001_machine::aggregate::{
    Machine, MachineChanges, MachineDto, MachineId, MachinePatch,
};
use contracts::domain::common::AggregateRoot;
use contracts::enums::MachineStatus;
use contracts::shared::maintenance::{format_iso_date, present};

use crate::domain::error::ServiceError;
use crate::domain::input::{interval_days, required_date, required_text};
use crate::shared::state::AppState;

/// Создание новой машины
pub async fn create(state: &AppState, dto: MachineDto) -> Result<Machine, ServiceError> {
    let name = required_text(&dto.name, "name")?;
    let model = required_text(&dto.model, "model")?;
    let location = required_text(&dto.location, "location")?;
    let last = required_date(&dto.last_maintenance_date, "lastMaintenanceDate")?;
    let interval = interval_days(dto.maintenance_interval_days)?;

    let aggregate = Machine::new_for_insert(
        name,
        model,
        location,
        dto.status.unwrap_or_default(),
        last,
        interval,
    )?;

    // Валидация
    aggregate.validate().map_err(ServiceError::Validation)?;

    state.store.insert_machine(aggregate.clone()).await;
    tracing::info!(
        collection = Machine::collection_name(),
        machine_id = %aggregate.id,
        name = %aggregate.name,
        next_maintenance = %aggregate.next_maintenance_date,
        "machine created"
    );
    Ok(aggregate)
}

/// Частичное обновление машины
pub async fn update(
    state: &AppState,
    id: MachineId,
    patch: MachinePatch,
) -> Result<Machine, ServiceError> {
    let changes = MachineChanges {
        name: patch
            .name
            .as_deref()
            .map(|v| required_text(v, "name"))
            .transpose()?,
        model: patch
            .model
            .as_deref()
            .map(|v| required_text(v, "model"))
            .transpose()?,
        location: patch
            .location
            .as_deref()
            .map(|v| required_text(v, "location"))
            .transpose()?,
        status: patch.status,
        last_maintenance_date: patch
            .last_maintenance_date
            .as_deref()
            .map(|v| required_date(v, "lastMaintenanceDate"))
            .transpose()?,
        maintenance_interval_days: patch
            .maintenance_interval_days
            .map(interval_days)
            .transpose()?,
    };

    let updated = state
        .store
        .update_machine(id, |machine| {
            machine.update(changes)?;
            machine.validate().map_err(ServiceError::Validation)
        })
        .await?
        .ok_or_else(|| ServiceError::not_found::<Machine>(id))?;

    tracing::info!(
        machine_id = %id,
        next_maintenance = %updated.next_maintenance_date,
        "machine updated"
    );
    Ok(updated)
}

/// Удаление машины вместе с её обслуживаниями.
/// Возвращает количество удалённых обслуживаний.
pub async fn delete(state: &AppState, id: MachineId) -> Result<usize, ServiceError> {
    let deleted = state
        .store
        .delete_machine(id)
        .await
        .ok_or_else(|| ServiceError::not_found::<Machine>(id))?;

    tracing::info!(
        machine_id = %id,
        name = %deleted.machine.name,
        schedules_removed = deleted.removed_schedules,
        "machine deleted"
    );
    Ok(deleted.removed_schedules)
}

pub async fn get_by_id(state: &AppState, id: MachineId) -> Result<Machine, ServiceError> {
    state
        .store
        .get_machine(id)
        .await
        .ok_or_else(|| ServiceError::not_found::<Machine>(id))
}

pub async fn list_all(state: &AppState) -> Vec<Machine> {
    state.store.list_machines().await
}

/// Все машины с рассчитанным на сегодня статусом обслуживания
pub async fn list_with_status(state: &AppState) -> Vec<MachineStatusRow> {
    let today = state.today();
    state
        .store
        .list_machines()
        .await
        .into_iter()
        .map(|machine| {
            let maintenance_status = machine.maintenance_status(today);
            MachineStatusRow {
                status_label: machine.status.display_name(),
                machine,
                maintenance_status,
                presentation: present(maintenance_status),
            }
        })
        .collect()
}

/// Вставка тестовых данных.
///
/// Даты считаются от сегодняшнего дня, чтобы на дашборде были все три статуса.
pub async fn insert_test_data(state: &AppState) -> Result<Vec<Machine>, ServiceError> {
    let today = state.today();
    let days_ago = |n: u64| {
        today
            .checked_sub_days(Days::new(n))
            .map(format_iso_date)
            .unwrap_or_default()
    };

    let data = vec![
        MachineDto {
            name: "Fresadora CNC-001".into(),
            model: "Haas VF-2".into(),
            location: "Planta Principal - Sector A".into(),
            status: Some(MachineStatus::Operational),
            last_maintenance_date: days_ago(10),
            maintenance_interval_days: 90,
        },
        MachineDto {
            name: "Torno CNC-002".into(),
            model: "Mazak QT-250".into(),
            location: "Planta Principal - Sector B".into(),
            status: Some(MachineStatus::Operational),
            last_maintenance_date: days_ago(25),
            maintenance_interval_days: 30,
        },
        MachineDto {
            name: "Compresor C-100".into(),
            model: "Atlas Copco GA30".into(),
            location: "Sala de compresores".into(),
            status: Some(MachineStatus::Maintenance),
            last_maintenance_date: days_ago(75),
            maintenance_interval_days: 60,
        },
        MachineDto {
            name: "Prensa Hidráulica PH-3".into(),
            model: "Schuler 200t".into(),
            location: "Nave 2".into(),
            status: Some(MachineStatus::Stopped),
            last_maintenance_date: days_ago(200),
            maintenance_interval_days: 180,
        },
    ];

    let mut created = Vec::with_capacity(data.len());
    for dto in data {
        created.push(create(state, dto).await?);
    }
    Ok(created)
}
