//! Navigation gate
//!
//! Decides, per navigation, whether a destination is reachable for the
//! current session. Unauthenticated users go to the login entry point;
//! authenticated users lacking a required role are sent back to the
//! dashboard instead of being shown an error.

use crate::core::session::Session;

/// Navigable destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Employees,
    Departments,
    Designations,
    Payroll,
    Reports,
}

impl Route {
    /// Roles that may enter; empty means any authenticated user.
    pub fn required_roles(self) -> &'static [&'static str] {
        match self {
            Route::Payroll | Route::Reports => &["ADMIN", "HR"],
            _ => &[],
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Resolve a navigation attempt against the current session.
pub fn resolve(route: Route, session: Option<&Session>) -> NavDecision {
    if !route.is_protected() {
        return NavDecision::Allow;
    }

    let Some(session) = session.filter(|s| s.is_authenticated) else {
        return NavDecision::RedirectToLogin;
    };

    let required = route.required_roles();
    if required.is_empty() || session.has_any_role(required) {
        NavDecision::Allow
    } else {
        NavDecision::RedirectToDashboard
    }
}
