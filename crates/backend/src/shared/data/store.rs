use contracts::domain::a001_machine::aggregate::{Machine, MachineId};
use contracts::domain::a002_maintenance_schedule::aggregate::{
    MaintenanceSchedule, MaintenanceScheduleId,
};
use contracts::domain::common::AggregateRoot;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Collections {
    machines: Vec<Machine>,
    schedules: Vec<MaintenanceSchedule>,
}

fn position_of<A: AggregateRoot>(items: &[A], id: A::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Результат удаления машины вместе с её обслуживаниями
#[derive(Debug, Clone)]
pub struct CascadeDelete {
    pub machine: Machine,
    pub removed_schedules: usize,
}

/// In-memory хранилище машин и обслуживаний.
///
/// Обе коллекции лежат под одной блокировкой, поэтому каскадное удаление,
/// обновление "прочитать-изменить-записать" и создание записи с именем машины
/// выполняются атомарно. Порядок списков совпадает с порядком вставки.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Machines
    // ------------------------------------------------------------------

    pub async fn list_machines(&self) -> Vec<Machine> {
        self.inner.read().await.machines.clone()
    }

    pub async fn get_machine(&self, id: MachineId) -> Option<Machine> {
        let inner = self.inner.read().await;
        position_of(&inner.machines, id).map(|i| inner.machines[i].clone())
    }

    pub async fn insert_machine(&self, machine: Machine) {
        self.inner.write().await.machines.push(machine);
    }

    /// Изменить машину на копии и сохранить только при `Ok`.
    /// `Ok(None)` означает, что машины нет.
    pub async fn update_machine<F, E>(&self, id: MachineId, apply: F) -> Result<Option<Machine>, E>
    where
        F: FnOnce(&mut Machine) -> Result<(), E>,
    {
        let mut inner = self.inner.write().await;
        let Some(index) = position_of(&inner.machines, id) else {
            return Ok(None);
        };

        let mut draft = inner.machines[index].clone();
        apply(&mut draft)?;
        inner.machines[index] = draft.clone();
        Ok(Some(draft))
    }

    /// Удалить машину и все обслуживания с её `machine_id` в одной критической секции
    pub async fn delete_machine(&self, id: MachineId) -> Option<CascadeDelete> {
        let mut inner = self.inner.write().await;
        let index = position_of(&inner.machines, id)?;
        let machine = inner.machines.remove(index);

        let before = inner.schedules.len();
        inner.schedules.retain(|s| s.machine_id != id);
        let removed_schedules = before - inner.schedules.len();

        Some(CascadeDelete {
            machine,
            removed_schedules,
        })
    }

    // ------------------------------------------------------------------
    // Maintenance schedules
    // ------------------------------------------------------------------

    pub async fn list_schedules(&self) -> Vec<MaintenanceSchedule> {
        self.inner.read().await.schedules.clone()
    }

    pub async fn get_schedule(&self, id: MaintenanceScheduleId) -> Option<MaintenanceSchedule> {
        let inner = self.inner.read().await;
        position_of(&inner.schedules, id).map(|i| inner.schedules[i].clone())
    }

    /// Создать обслуживание для существующей машины.
    ///
    /// `build` получает машину под той же блокировкой, так что запись не может
    /// появиться для уже удалённой машины. `Ok(None)` означает, что машины нет.
    pub async fn insert_schedule_for<F, E>(
        &self,
        machine_id: MachineId,
        build: F,
    ) -> Result<Option<MaintenanceSchedule>, E>
    where
        F: FnOnce(&Machine) -> Result<MaintenanceSchedule, E>,
    {
        let mut inner = self.inner.write().await;
        let Some(index) = position_of(&inner.machines, machine_id) else {
            return Ok(None);
        };

        let schedule = build(&inner.machines[index])?;
        inner.schedules.push(schedule.clone());
        Ok(Some(schedule))
    }

    pub async fn update_schedule<F, E>(
        &self,
        id: MaintenanceScheduleId,
        apply: F,
    ) -> Result<Option<MaintenanceSchedule>, E>
    where
        F: FnOnce(&mut MaintenanceSchedule) -> Result<(), E>,
    {
        let mut inner = self.inner.write().await;
        let Some(index) = position_of(&inner.schedules, id) else {
            return Ok(None);
        };

        let mut draft = inner.schedules[index].clone();
        apply(&mut draft)?;
        inner.schedules[index] = draft.clone();
        Ok(Some(draft))
    }

    pub async fn delete_schedule(&self, id: MaintenanceScheduleId) -> Option<MaintenanceSchedule> {
        let mut inner = self.inner.write().await;
        let index = position_of(&inner.schedules, id)?;
        Some(inner.schedules.remove(index))
    }

    /// Согласованный снимок обеих коллекций (для дашборда)
    pub async fn snapshot(&self) -> (Vec<Machine>, Vec<MaintenanceSchedule>) {
        let inner = self.inner.read().await;
        (inner.machines.clone(), inner.schedules.clone())
    }
}
