pub mod a001_machine;
pub mod a002_maintenance_schedule;
pub mod error;
pub mod input;
