pub mod machine_status;
pub mod maintenance_type;
pub mod schedule_status;

pub use machine_status::MachineStatus;
pub use maintenance_type::MaintenanceType;
pub use schedule_status::ScheduleStatus;
