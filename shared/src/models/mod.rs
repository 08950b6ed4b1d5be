//! Data models
//!
//! Read models mirror what the backend returns; `*Payload` types carry the
//! exact shapes the backend expects on create/update. All wire names are
//! camelCase (the backend is persistence-oriented: `joiningDate`,
//! `baseSalary`, `phoneNumber`), translated from UI-facing names by the
//! form controllers in payday-desk.

pub mod department;
pub mod designation;
pub mod employee;
pub mod payroll;

// Re-exports
pub use department::*;
pub use designation::*;
pub use employee::*;
pub use payroll::*;
