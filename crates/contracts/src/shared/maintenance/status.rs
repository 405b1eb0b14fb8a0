use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Окно "скоро обслуживание" в днях, включая обе границы
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Срочность обслуживания машины (производное значение, не хранится)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Overdue,
    DueSoon,
    UpToDate,
}

impl MaintenanceStatus {
    /// Токен для API
    pub fn code(&self) -> &'static str {
        match self {
            MaintenanceStatus::Overdue => "overdue",
            MaintenanceStatus::DueSoon => "due-soon",
            MaintenanceStatus::UpToDate => "up-to-date",
        }
    }

    pub fn all() -> Vec<MaintenanceStatus> {
        vec![
            MaintenanceStatus::Overdue,
            MaintenanceStatus::DueSoon,
            MaintenanceStatus::UpToDate,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "overdue" => Some(MaintenanceStatus::Overdue),
            "due-soon" => Some(MaintenanceStatus::DueSoon),
            "up-to-date" => Some(MaintenanceStatus::UpToDate),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Классификация срочности по дате следующего обслуживания.
///
/// Разница считается в целых календарных днях: `< 0` просрочено,
/// `0..=7` скоро, иначе в порядке.
pub fn classify(next_maintenance: NaiveDate, today: NaiveDate) -> MaintenanceStatus {
    let days_left = (next_maintenance - today).num_days();

    if days_left < 0 {
        MaintenanceStatus::Overdue
    } else if days_left <= DUE_SOON_WINDOW_DAYS {
        MaintenanceStatus::DueSoon
    } else {
        MaintenanceStatus::UpToDate
    }
}

/// То же, что [`classify`], но "сейчас" передаётся моментом времени.
/// Время суток отбрасывается в часовом поясе самого `now`.
pub fn classify_at<Tz: TimeZone>(next_maintenance: NaiveDate, now: &DateTime<Tz>) -> MaintenanceStatus {
    classify(next_maintenance, now.date_naive())
}
