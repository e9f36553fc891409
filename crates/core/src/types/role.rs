//! Account roles and the dashboard views each role can reach.
//!
//! View gating is a capability set: a pure function from role to the views
//! that role may open. Navigation evaluates it once per render instead of
//! scattering role checks through the UI.

use serde::{Deserialize, Serialize};

/// Account role, as reported by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Employee,
    Admin,
}

/// Identifiers for the back-office dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    Overview,
    EmployeeHome,
    Orders,
    Pos,
    Inventory,
    Users,
    EmployeeManagement,
}

impl DashboardView {
    /// Human-readable tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::EmployeeHome => "My Dashboard",
            Self::Orders => "Orders",
            Self::Pos => "POS",
            Self::Inventory => "Inventory",
            Self::Users => "Users",
            Self::EmployeeManagement => "Employee Management",
        }
    }
}

impl UserRole {
    /// The set of dashboard views this role may open, in display order.
    #[must_use]
    pub const fn permitted_views(self) -> &'static [DashboardView] {
        match self {
            Self::Customer => &[],
            Self::Employee => &[
                DashboardView::EmployeeHome,
                DashboardView::Orders,
                DashboardView::Pos,
                DashboardView::Inventory,
            ],
            Self::Admin => &[
                DashboardView::Overview,
                DashboardView::Orders,
                DashboardView::Pos,
                DashboardView::Inventory,
                DashboardView::Users,
                DashboardView::EmployeeManagement,
            ],
        }
    }

    /// The view a freshly opened dashboard lands on, if the role has one.
    #[must_use]
    pub const fn default_view(self) -> Option<DashboardView> {
        match self {
            Self::Customer => None,
            Self::Employee => Some(DashboardView::EmployeeHome),
            Self::Admin => Some(DashboardView::Overview),
        }
    }

    /// Whether this role may open the given view.
    #[must_use]
    pub fn can_view(self, view: DashboardView) -> bool {
        self.permitted_views().contains(&view)
    }

    /// Whether this role may reach the dashboard at all.
    #[must_use]
    pub const fn can_access_dashboard(self) -> bool {
        !matches!(self, Self::Customer)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Employee => write!(f, "employee"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "employee" => Ok(Self::Employee),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_has_no_dashboard() {
        assert!(UserRole::Customer.permitted_views().is_empty());
        assert!(UserRole::Customer.default_view().is_none());
        assert!(!UserRole::Customer.can_access_dashboard());
    }

    #[test]
    fn test_employee_capability_set() {
        let views = UserRole::Employee.permitted_views();
        assert_eq!(
            views,
            &[
                DashboardView::EmployeeHome,
                DashboardView::Orders,
                DashboardView::Pos,
                DashboardView::Inventory,
            ]
        );
        assert!(!UserRole::Employee.can_view(DashboardView::Users));
        assert!(!UserRole::Employee.can_view(DashboardView::Overview));
        assert_eq!(
            UserRole::Employee.default_view(),
            Some(DashboardView::EmployeeHome)
        );
    }

    #[test]
    fn test_admin_capability_set() {
        let views = UserRole::Admin.permitted_views();
        assert_eq!(views.len(), 6);
        assert!(UserRole::Admin.can_view(DashboardView::Users));
        assert!(UserRole::Admin.can_view(DashboardView::EmployeeManagement));
        // Admins land on Overview and never see the employee home tab.
        assert_eq!(UserRole::Admin.default_view(), Some(DashboardView::Overview));
        assert!(!UserRole::Admin.can_view(DashboardView::EmployeeHome));
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [UserRole::Customer, UserRole::Employee, UserRole::Admin] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
        assert!("manager".parse::<UserRole>().is_err());
    }
}
