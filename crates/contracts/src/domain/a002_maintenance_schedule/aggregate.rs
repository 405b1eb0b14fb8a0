use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_machine::aggregate::{Machine, MachineId};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::{MaintenanceType, ScheduleStatus};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор запланированного обслуживания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceScheduleId(pub Uuid);

impl MaintenanceScheduleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for MaintenanceScheduleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MaintenanceScheduleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for MaintenanceScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запланированное (или выполненное) обслуживание машины
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    pub id: MaintenanceScheduleId,

    /// Слабая ссылка на машину; при удалении машины запись удаляется каскадно
    pub machine_id: MachineId,

    /// Имя машины на момент создания записи. После переименования машины не меняется.
    pub machine_name: String,

    pub scheduled_date: NaiveDate,
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub status: ScheduleStatus,
}

impl MaintenanceSchedule {
    /// Создать запись для машины, зафиксировав её текущее имя
    pub fn new_for_insert(
        machine: &Machine,
        scheduled_date: NaiveDate,
        maintenance_type: MaintenanceType,
        description: String,
        status: ScheduleStatus,
    ) -> Self {
        Self {
            id: MaintenanceScheduleId::new_v4(),
            machine_id: machine.id,
            machine_name: machine.name.clone(),
            scheduled_date,
            maintenance_type,
            description,
            status,
        }
    }

    /// Применить частичное обновление. `machine_id` и `machine_name` не меняются.
    pub fn update(&mut self, changes: MaintenanceScheduleChanges) {
        if let Some(date) = changes.scheduled_date {
            self.scheduled_date = date;
        }
        if let Some(kind) = changes.maintenance_type {
            self.maintenance_type = kind;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("description is required".into());
        }
        Ok(())
    }

    /// Дата не может быть раньше сегодняшней (проверяется только при создании)
    pub fn validate_not_in_past(&self, today: NaiveDate) -> Result<(), String> {
        if self.scheduled_date < today {
            return Err(format!(
                "scheduledDate {} is before today ({})",
                self.scheduled_date, today
            ));
        }
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == ScheduleStatus::Pending
    }
}

impl AggregateRoot for MaintenanceSchedule {
    type Id = MaintenanceScheduleId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "maintenanceSchedules"
    }

    fn element_name() -> &'static str {
        "Maintenance schedule"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания записи.
///
/// `machineName` клиента игнорируется: имя берётся из хранилища.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceScheduleDto {
    pub machine_id: String,
    pub scheduled_date: String,
    pub maintenance_type: Option<MaintenanceType>,
    pub description: String,
    pub status: Option<ScheduleStatus>,
}

/// Частичное обновление записи (тело PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceSchedulePatch {
    pub scheduled_date: Option<String>,
    pub maintenance_type: Option<MaintenanceType>,
    pub description: Option<String>,
    pub status: Option<ScheduleStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceScheduleChanges {
    pub scheduled_date: Option<NaiveDate>,
    pub maintenance_type: Option<MaintenanceType>,
    pub description: Option<String>,
    pub status: Option<ScheduleStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::MachineStatus;
    use crate::shared::maintenance::parse_iso_date;

    fn press() -> Machine {
        Machine::new_for_insert(
            "Prensa H-200".into(),
            "Schuler 200t".into(),
            "Nave 2".into(),
            MachineStatus::Operational,
            parse_iso_date("2024-05-01").unwrap(),
            30,
        )
        .unwrap()
    }

    fn schedule_for(machine: &Machine) -> MaintenanceSchedule {
        MaintenanceSchedule::new_for_insert(
            machine,
            parse_iso_date("2024-06-10").unwrap(),
            MaintenanceType::Preventive,
            "Cambio de aceite".into(),
            ScheduleStatus::default(),
        )
    }

    #[test]
    fn test_snapshots_machine_name() {
        let mut machine = press();
        let schedule = schedule_for(&machine);
        machine.name = "Prensa renombrada".into();

        assert_eq!(schedule.machine_id, machine.id);
        assert_eq!(schedule.machine_name, "Prensa H-200");
        assert_eq!(schedule.status, ScheduleStatus::Pending);
    }

    #[test]
    fn test_not_in_past() {
        let schedule = schedule_for(&press());
        assert!(schedule
            .validate_not_in_past(parse_iso_date("2024-06-10").unwrap())
            .is_ok());
        assert!(schedule
            .validate_not_in_past(parse_iso_date("2024-06-11").unwrap())
            .is_err());
    }

    #[test]
    fn test_blank_description_rejected() {
        let mut schedule = schedule_for(&press());
        schedule.description = " ".into();
        assert_eq!(
            schedule.validate(),
            Err("description is required".to_string())
        );
    }

    #[test]
    fn test_update_status_only() {
        let mut schedule = schedule_for(&press());
        schedule.update(MaintenanceScheduleChanges {
            status: Some(ScheduleStatus::Completed),
            ..Default::default()
        });
        assert_eq!(schedule.status, ScheduleStatus::Completed);
        assert_eq!(schedule.description, "Cambio de aceite");
        assert!(!schedule.is_pending());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(schedule_for(&press())).unwrap();
        assert_eq!(json["scheduledDate"], "2024-06-10");
        assert_eq!(json["maintenanceType"], "preventive");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["machineName"], "Prensa H-200");
        assert!(json["machineId"].is_string());
    }
}
