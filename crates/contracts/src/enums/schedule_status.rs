use serde::{Deserialize, Serialize};

/// Статус запланированного обслуживания.
///
/// Хранится как есть: автоматического перехода `pending` -> `overdue` нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Pending,
    Completed,
    Overdue,
}

impl ScheduleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Overdue => "overdue",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "Pendiente",
            ScheduleStatus::Completed => "Completado",
            ScheduleStatus::Overdue => "Atrasado",
        }
    }

    pub fn all() -> Vec<ScheduleStatus> {
        vec![
            ScheduleStatus::Pending,
            ScheduleStatus::Completed,
            ScheduleStatus::Overdue,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(ScheduleStatus::Pending),
            "completed" => Some(ScheduleStatus::Completed),
            "overdue" => Some(ScheduleStatus::Overdue),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
