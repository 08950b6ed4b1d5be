//! User-facing notifications
//!
//! Notices model the transient dismissible alerts of the UI. The log is
//! owned by the [`DeskContext`](crate::core::DeskContext); a front end
//! drains it after each action and shows whatever accumulated.

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Accumulated notices awaiting display
#[derive(Debug, Default)]
pub struct NoticeLog {
    items: Vec<Notice>,
}

impl NoticeLog {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.items.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Take all pending notices (display dismisses them).
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
