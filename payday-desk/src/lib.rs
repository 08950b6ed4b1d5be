//! Payday Desk - HR/payroll administration core
//!
//! The session-scoped state and orchestration layer behind the admin
//! pages: entity stores and loaders, form controllers, payroll status
//! transitions, the persisted session with its navigation gate, and
//! render-agnostic view models. Rendering itself is left to whatever
//! front end consumes the [`view`] types.

pub mod core;
pub mod forms;
pub mod view;

pub use crate::core::{
    DashboardStats, DeskContext, DeskError, Notice, NoticeLevel, NoticeLog, Session, SessionError,
    SessionStore, nav,
};
pub use forms::FormError;
