//! Общие типы учёта обслуживания: агрегаты, DTO, перечисления и
//! расчёт дат и статусов обслуживания.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
