//! Maintenance status & date engine
//!
//! Pure functions shared by the backend and any client:
//! - [`date_calc`]: next maintenance date arithmetic on `YYYY-MM-DD` dates
//! - [`status`]: urgency classification against an explicit "today"
//! - [`presentation`]: label and style category for a status

pub mod date_calc;
pub mod presentation;
pub mod status;

pub use date_calc::{
    calculate_next_maintenance_date, format_iso_date, next_maintenance_date, parse_iso_date,
    DateError, ISO_DATE_FORMAT,
};
pub use presentation::{present, present_token, StatusCategory, StatusPresentation};
pub use status::{classify, classify_at, MaintenanceStatus, DUE_SOON_WINDOW_DAYS};
