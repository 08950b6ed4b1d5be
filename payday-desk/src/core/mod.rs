//! Desk core: context, actions, session, navigation, notifications

pub mod actions;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod nav;
pub mod notify;
pub mod session;

pub use context::DeskContext;
pub use dashboard::DashboardStats;
pub use error::DeskError;
pub use notify::{Notice, NoticeLevel, NoticeLog};
pub use session::{SESSION_STORAGE_KEY, Session, SessionError, SessionStore};
