use chrono::NaiveDate;
use contracts::dashboards::d001_maintenance_overview::{MaintenanceSummary, UPCOMING_LIMIT};
use contracts::domain::a001_machine::aggregate::Machine;
use contracts::domain::a002_maintenance_schedule::aggregate::MaintenanceSchedule;
use contracts::enums::MachineStatus;
use contracts::shared::maintenance::MaintenanceStatus;

use crate::shared::state::AppState;

/// Обзор обслуживания для дашборда
pub async fn get_summary(state: &AppState) -> MaintenanceSummary {
    let today = state.today();
    let (machines, schedules) = state.store.snapshot().await;
    build_summary(&machines, &schedules, today)
}

/// Сводка по согласованному снимку хранилища
pub fn build_summary(
    machines: &[Machine],
    schedules: &[MaintenanceSchedule],
    today: NaiveDate,
) -> MaintenanceSummary {
    let (mut up_to_date, mut due_soon, mut overdue) = (0, 0, 0);
    for machine in machines {
        match machine.maintenance_status(today) {
            MaintenanceStatus::UpToDate => up_to_date += 1,
            MaintenanceStatus::DueSoon => due_soon += 1,
            MaintenanceStatus::Overdue => overdue += 1,
        }
    }

    let operational = machines
        .iter()
        .filter(|m| m.status == MachineStatus::Operational)
        .count();

    // sort_by_key is stable: equal dates keep insertion order
    let mut upcoming: Vec<MaintenanceSchedule> =
        schedules.iter().filter(|s| s.is_pending()).cloned().collect();
    upcoming.sort_by_key(|s| s.scheduled_date);
    upcoming.truncate(UPCOMING_LIMIT);

    MaintenanceSummary {
        as_of: today,
        total_machines: machines.len(),
        up_to_date,
        due_soon,
        overdue,
        operational,
        upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{MaintenanceType, ScheduleStatus};
    use contracts::shared::maintenance::parse_iso_date;

    fn date(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn machine(last: &str, interval: u32, status: MachineStatus) -> Machine {
        Machine::new_for_insert(
            "Máquina".into(),
            "X".into(),
            "Planta".into(),
            status,
            date(last),
            interval,
        )
        .unwrap()
    }

    fn schedule(machine: &Machine, on: &str, status: ScheduleStatus, description: &str) -> MaintenanceSchedule {
        MaintenanceSchedule::new_for_insert(
            machine,
            date(on),
            MaintenanceType::Corrective,
            description.into(),
            status,
        )
    }

    #[test]
    fn test_counts_by_status() {
        let machines = vec![
            machine("2024-05-01", 30, MachineStatus::Operational), // 2024-05-31 overdue
            machine("2024-05-02", 30, MachineStatus::Stopped),     // 2024-06-01 due soon
            machine("2024-05-09", 30, MachineStatus::Operational), // 2024-06-08 due soon
            machine("2024-05-10", 30, MachineStatus::Maintenance), // 2024-06-09 up to date
        ];
        let summary = build_summary(&machines, &[], date("2024-06-01"));

        assert_eq!(summary.total_machines, 4);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.due_soon, 2);
        assert_eq!(summary.up_to_date, 1);
        assert_eq!(summary.operational, 2);
        assert!(summary.upcoming.is_empty());
    }

    #[test]
    fn test_upcoming_only_pending_sorted_and_limited() {
        let m = machine("2024-05-01", 30, MachineStatus::Operational);
        let schedules = vec![
            schedule(&m, "2024-06-20", ScheduleStatus::Pending, "f"),
            schedule(&m, "2024-06-02", ScheduleStatus::Completed, "done"),
            schedule(&m, "2024-06-05", ScheduleStatus::Pending, "b"),
            schedule(&m, "2024-06-03", ScheduleStatus::Pending, "a"),
            schedule(&m, "2024-06-05", ScheduleStatus::Pending, "c"),
            schedule(&m, "2024-06-01", ScheduleStatus::Overdue, "late"),
            schedule(&m, "2024-06-10", ScheduleStatus::Pending, "d"),
            schedule(&m, "2024-06-12", ScheduleStatus::Pending, "e"),
        ];
        let summary = build_summary(&[m], &schedules, date("2024-06-01"));

        let order: Vec<&str> = summary
            .upcoming
            .iter()
            .map(|s| s.description.as_str())
            .collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_summary_uses_injected_today() {
        let state = AppState::fixed("2024-06-01");
        state
            .store
            .insert_machine(machine("2024-05-01", 30, MachineStatus::Operational))
            .await;

        let summary = get_summary(&state).await;
        assert_eq!(summary.as_of, date("2024-06-01"));
        assert_eq!(summary.overdue, 1);
    }
}
