use serde::{Deserialize, Serialize};

/// Эксплуатационное состояние машины (не зависит от сроков обслуживания)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    #[default]
    Operational,
    Maintenance,
    Stopped,
}

impl MachineStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "operational",
            MachineStatus::Maintenance => "maintenance",
            MachineStatus::Stopped => "stopped",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "Operacional",
            MachineStatus::Maintenance => "En Mantenimiento",
            MachineStatus::Stopped => "Detenida",
        }
    }

    pub fn all() -> Vec<MachineStatus> {
        vec![
            MachineStatus::Operational,
            MachineStatus::Maintenance,
            MachineStatus::Stopped,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "operational" => Some(MachineStatus::Operational),
            "maintenance" => Some(MachineStatus::Maintenance),
            "stopped" => Some(MachineStatus::Stopped),
            _ => None,
        }
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
