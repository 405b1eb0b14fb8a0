use serde::{Deserialize, Serialize};

/// Вид обслуживания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Inspection,
}

impl MaintenanceType {
    pub fn code(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "preventive",
            MaintenanceType::Corrective => "corrective",
            MaintenanceType::Inspection => "inspection",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaintenanceType::Preventive => "Preventivo",
            MaintenanceType::Corrective => "Correctivo",
            MaintenanceType::Inspection => "Inspección",
        }
    }

    pub fn all() -> Vec<MaintenanceType> {
        vec![
            MaintenanceType::Preventive,
            MaintenanceType::Corrective,
            MaintenanceType::Inspection,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "preventive" => Some(MaintenanceType::Preventive),
            "corrective" => Some(MaintenanceType::Corrective),
            "inspection" => Some(MaintenanceType::Inspection),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
