use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::MachineStatus;
use crate::shared::maintenance::{
    classify, next_maintenance_date, DateError, MaintenanceStatus,
};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор машины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(pub Uuid);

impl MachineId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for MachineId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MachineId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Машина, требующая периодического обслуживания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub model: String,
    pub location: String,
    pub status: MachineStatus,
    pub last_maintenance_date: NaiveDate,
    pub maintenance_interval_days: u32,

    /// Производное поле: всегда `last_maintenance_date + maintenance_interval_days`
    pub next_maintenance_date: NaiveDate,
}

impl Machine {
    /// Создать новую машину для вставки в хранилище
    pub fn new_for_insert(
        name: String,
        model: String,
        location: String,
        status: MachineStatus,
        last_maintenance_date: NaiveDate,
        maintenance_interval_days: u32,
    ) -> Result<Self, DateError> {
        let next_maintenance_date =
            next_maintenance_date(last_maintenance_date, maintenance_interval_days)?;

        Ok(Self {
            id: MachineId::new_v4(),
            name,
            model,
            location,
            status,
            last_maintenance_date,
            maintenance_interval_days,
            next_maintenance_date,
        })
    }

    /// Применить частичное обновление.
    /// Дата следующего обслуживания пересчитывается всегда.
    pub fn update(&mut self, changes: MachineChanges) -> Result<(), DateError> {
        let MachineChanges {
            name,
            model,
            location,
            status,
            last_maintenance_date,
            maintenance_interval_days,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(date) = last_maintenance_date {
            self.last_maintenance_date = date;
        }
        if let Some(days) = maintenance_interval_days {
            self.maintenance_interval_days = days;
        }

        self.before_write()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".into());
        }
        if self.model.trim().is_empty() {
            return Err("model is required".into());
        }
        if self.location.trim().is_empty() {
            return Err("location is required".into());
        }
        if self.maintenance_interval_days < 1 {
            return Err("maintenanceIntervalDays must be at least 1".into());
        }
        Ok(())
    }

    /// Хук перед записью: восстанавливает производную дату
    pub fn before_write(&mut self) -> Result<(), DateError> {
        self.next_maintenance_date =
            next_maintenance_date(self.last_maintenance_date, self.maintenance_interval_days)?;
        Ok(())
    }

    pub fn maintenance_status(&self, today: NaiveDate) -> MaintenanceStatus {
        classify(self.next_maintenance_date, today)
    }
}

impl AggregateRoot for Machine {
    type Id = MachineId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "machines"
    }

    fn element_name() -> &'static str {
        "Machine"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания машины.
///
/// Даты приходят строками `YYYY-MM-DD` и разбираются сервисом, чтобы ошибка
/// формата отличалась от ошибки десериализации. `id` и `nextMaintenanceDate`
/// от клиента не принимаются.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineDto {
    pub name: String,
    pub model: String,
    pub location: String,
    pub status: Option<MachineStatus>,
    pub last_maintenance_date: String,
    pub maintenance_interval_days: i64,
}

/// Частичное обновление машины (тело PUT)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MachinePatch {
    pub name: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub status: Option<MachineStatus>,
    pub last_maintenance_date: Option<String>,
    pub maintenance_interval_days: Option<i64>,
}

/// Проверенные изменения: даты разобраны, интервал приведён к `u32`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineChanges {
    pub name: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub status: Option<MachineStatus>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval_days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::maintenance::parse_iso_date;

    fn lathe() -> Machine {
        Machine::new_for_insert(
            "Torno CNC-01".into(),
            "Haas ST-10".into(),
            "Planta A".into(),
            MachineStatus::Operational,
            parse_iso_date("2024-01-20").unwrap(),
            15,
        )
        .unwrap()
    }

    #[test]
    fn test_new_computes_next_date() {
        let machine = lathe();
        assert_eq!(
            machine.next_maintenance_date,
            parse_iso_date("2024-02-04").unwrap()
        );
        assert!(machine.validate().is_ok());
    }

    #[test]
    fn test_update_recomputes_when_interval_changes() {
        let mut machine = lathe();
        machine
            .update(MachineChanges {
                maintenance_interval_days: Some(30),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            machine.next_maintenance_date,
            parse_iso_date("2024-02-19").unwrap()
        );
        assert_eq!(
            machine.last_maintenance_date,
            parse_iso_date("2024-01-20").unwrap()
        );
    }

    #[test]
    fn test_update_recomputes_when_last_date_changes() {
        let mut machine = lathe();
        machine
            .update(MachineChanges {
                last_maintenance_date: Some(parse_iso_date("2024-12-25").unwrap()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(
            machine.next_maintenance_date,
            parse_iso_date("2025-01-09").unwrap()
        );
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let mut machine = lathe();
        let id = machine.id;
        machine
            .update(MachineChanges {
                name: Some("Torno CNC-02".into()),
                status: Some(MachineStatus::Stopped),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(machine.id, id);
        assert_eq!(machine.name, "Torno CNC-02");
        assert_eq!(machine.model, "Haas ST-10");
        assert_eq!(machine.status, MachineStatus::Stopped);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut machine = lathe();
        machine.location = "   ".into();
        assert_eq!(machine.validate(), Err("location is required".to_string()));

        let mut machine = lathe();
        machine.maintenance_interval_days = 0;
        assert!(machine.validate().is_err());
    }

    #[test]
    fn test_serializes_camel_case_dates() {
        let json = serde_json::to_value(lathe()).unwrap();
        assert_eq!(json["lastMaintenanceDate"], "2024-01-20");
        assert_eq!(json["nextMaintenanceDate"], "2024-02-04");
        assert_eq!(json["maintenanceIntervalDays"], 15);
        assert_eq!(json["status"], "operational");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_patch_ignores_client_next_date() {
        let patch: MachinePatch = serde_json::from_str(
            r#"{"name": "X", "nextMaintenanceDate": "2030-01-01", "id": "abc"}"#,
        )
        .unwrap();
        assert_eq!(patch.name.as_deref(), Some("X"));
        assert!(patch.last_maintenance_date.is_none());
    }

    #[test]
    fn test_id_and_names() {
        let machine = lathe();
        assert_eq!(machine.id(), machine.id);
        assert_eq!(Machine::collection_name(), "machines");
        assert_eq!(Machine::element_name(), "Machine");

        let raw = machine.id.as_string();
        assert_eq!(MachineId::from_string(&raw), Ok(machine.id));
        assert!(MachineId::from_string("M-1").is_err());
    }
}
