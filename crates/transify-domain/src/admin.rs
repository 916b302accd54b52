//! Admin role, account status, and the role→capability mapping.

use serde::{Deserialize, Serialize};

/// Administrative privilege tier within one organization.
///
/// Wire format: `"ADMIN"` / `"SUPER_ADMIN"` — the strings stored in the
/// `admin_users` table and carried in session-token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl AdminRole {
    /// Parse from the stored wire string. Returns `None` for unknown values.
    pub fn from_str_wire(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Human-readable label used in email copy.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

/// Lifecycle state of an admin account.
///
/// `Invited` accounts hold a live invite token; `Disabled` accounts are
/// retained for history and no longer authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminStatus {
    Invited,
    Active,
    Disabled,
}

impl AdminStatus {
    pub fn from_str_wire(s: &str) -> Option<Self> {
        match s {
            "INVITED" => Some(Self::Invited),
            "ACTIVE" => Some(Self::Active),
            "DISABLED" => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invited => "INVITED",
            Self::Active => "ACTIVE",
            Self::Disabled => "DISABLED",
        }
    }
}

/// A single grantable capability. Fieldless so the role→capability table is
/// exhaustiveness-checked at compile time rather than being a string map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageAdmins,
    InviteAdmin,
    RemoveAdmin,
    ChangeRoles,
    ManageOrgSettings,
    ManageVehicles,
    ManageDrivers,
    ManageRoutes,
    ManageMembers,
    ViewAnalytics,
    ViewAuditLogs,
    FullDashboard,
}

/// Capabilities shared by both tiers.
const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ManageVehicles,
    Permission::ManageDrivers,
    Permission::ManageRoutes,
    Permission::ManageMembers,
    Permission::ViewAnalytics,
];

/// Super-admin set: everything an admin has, plus admin management,
/// org settings, audit visibility, and the full dashboard.
const SUPER_ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::ManageAdmins,
    Permission::InviteAdmin,
    Permission::RemoveAdmin,
    Permission::ChangeRoles,
    Permission::ManageOrgSettings,
    Permission::ManageVehicles,
    Permission::ManageDrivers,
    Permission::ManageRoutes,
    Permission::ManageMembers,
    Permission::ViewAnalytics,
    Permission::ViewAuditLogs,
    Permission::FullDashboard,
];

impl AdminRole {
    /// The fixed capability set for this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Admin => ADMIN_PERMISSIONS,
            Self::SuperAdmin => SUPER_ADMIN_PERMISSIONS,
        }
    }
}

/// Whether `role` is granted `permission`. Pure set membership; callable
/// from both the backend and any presentation layer (the backend re-checks
/// independently on every mutating operation).
pub fn has_permission(role: AdminRole, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// Only super admins may invite, remove, or re-role other admins.
pub fn can_manage_admins(role: AdminRole) -> bool {
    role == AdminRole::SuperAdmin
}
