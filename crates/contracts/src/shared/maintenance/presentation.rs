use serde::{Deserialize, Serialize};

use super::status::MaintenanceStatus;

/// Категория отображения. Конкретные цвета и классы выбирает UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Ok,
    Warn,
    Danger,
    Neutral,
}

/// Метаданные для отображения статуса обслуживания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    /// Токен статуса, `None` для неизвестного значения
    pub code: Option<MaintenanceStatus>,
    pub label: &'static str,
    pub category: StatusCategory,
}

impl StatusPresentation {
    /// Нейтральное отображение для значений, которых нет в перечислении
    pub const UNKNOWN: StatusPresentation = StatusPresentation {
        code: None,
        label: "Desconocido",
        category: StatusCategory::Neutral,
    };
}

pub fn present(status: MaintenanceStatus) -> StatusPresentation {
    let (label, category) = match status {
        MaintenanceStatus::UpToDate => ("Al día", StatusCategory::Ok),
        MaintenanceStatus::DueSoon => ("Próximo", StatusCategory::Warn),
        MaintenanceStatus::Overdue => ("Atrasado", StatusCategory::Danger),
    };

    StatusPresentation {
        code: Some(status),
        label,
        category,
    }
}

/// Отображение для "сырого" токена, пришедшего извне.
///
/// Неизвестный токен означает нарушение целостности данных: пишем ошибку в лог
/// и возвращаем нейтральную категорию, вызывающий код не падает.
pub fn present_token(token: &str) -> StatusPresentation {
    match MaintenanceStatus::from_code(token) {
        Some(status) => present(status),
        None => {
            tracing::error!(token, "unknown maintenance status token, using neutral fallback");
            StatusPresentation::UNKNOWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_distinct_category() {
        let categories: Vec<StatusCategory> = MaintenanceStatus::all()
            .into_iter()
            .map(|s| present(s).category)
            .collect();
        assert_eq!(
            categories,
            vec![StatusCategory::Danger, StatusCategory::Warn, StatusCategory::Ok]
        );
    }

    #[test]
    fn test_mapping_is_stable() {
        for status in MaintenanceStatus::all() {
            let first = present(status);
            for _ in 0..3 {
                assert_eq!(present(status), first);
            }
            assert_eq!(first.code, Some(status));
            assert_ne!(first.category, StatusCategory::Neutral);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(present(MaintenanceStatus::UpToDate).label, "Al día");
        assert_eq!(present(MaintenanceStatus::DueSoon).label, "Próximo");
        assert_eq!(present(MaintenanceStatus::Overdue).label, "Atrasado");
    }

    #[test]
    fn test_known_token() {
        assert_eq!(present_token("due-soon"), present(MaintenanceStatus::DueSoon));
    }

    #[test]
    fn test_unknown_token_falls_back_to_neutral() {
        for token in ["", "Overdue", "pending", "due_soon"] {
            let shown = present_token(token);
            assert_eq!(shown, StatusPresentation::UNKNOWN);
            assert_eq!(shown.category, StatusCategory::Neutral);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(present(MaintenanceStatus::Overdue)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "overdue", "label": "Atrasado", "category": "danger"})
        );
    }
}
