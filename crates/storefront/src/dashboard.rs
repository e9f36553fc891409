//! Dashboard composition: which tabs a user sees and which one opens first.
//!
//! Gating itself is the capability set on [`UserRole`]; this module only
//! shapes it for rendering, so UI surfaces never re-derive permissions.

use rave_core::{DashboardView, UserRole};

/// A dashboard tab ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTab {
    pub view: DashboardView,
    pub title: &'static str,
}

impl From<DashboardView> for DashboardTab {
    fn from(view: DashboardView) -> Self {
        Self {
            view,
            title: view.title(),
        }
    }
}

/// The tabs `role` may open, in display order.
#[must_use]
pub fn tabs_for(role: UserRole) -> Vec<DashboardTab> {
    role.permitted_views()
        .iter()
        .copied()
        .map(DashboardTab::from)
        .collect()
}

/// The tab the dashboard opens on for `role`, if the role has one.
#[must_use]
pub fn initial_tab(role: UserRole) -> Option<DashboardTab> {
    role.default_view().map(DashboardTab::from)
}
