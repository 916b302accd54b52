//! Audit action vocabulary.

use serde::{Deserialize, Serialize};

/// Action tag on an audit log entry.
///
/// The identity core writes the `Admin*` actions. The remaining tags are
/// written by the surrounding application (settings and fleet management)
/// and are kept here so those rows still parse when queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    AdminLogin,
    AdminLogout,
    AdminInviteSent,
    AdminInviteAccepted,
    AdminRemoved,
    AdminRoleChanged,
    SettingsUpdated,
    VehicleAdded,
    DriverAdded,
    RouteAdded,
    MemberAdded,
}

impl AuditAction {
    pub fn from_str_wire(s: &str) -> Option<Self> {
        match s {
            "ADMIN_LOGIN" => Some(Self::AdminLogin),
            "ADMIN_LOGOUT" => Some(Self::AdminLogout),
            "ADMIN_INVITE_SENT" => Some(Self::AdminInviteSent),
            "ADMIN_INVITE_ACCEPTED" => Some(Self::AdminInviteAccepted),
            "ADMIN_REMOVED" => Some(Self::AdminRemoved),
            "ADMIN_ROLE_CHANGED" => Some(Self::AdminRoleChanged),
            "SETTINGS_UPDATED" => Some(Self::SettingsUpdated),
            "VEHICLE_ADDED" => Some(Self::VehicleAdded),
            "DRIVER_ADDED" => Some(Self::DriverAdded),
            "ROUTE_ADDED" => Some(Self::RouteAdded),
            "MEMBER_ADDED" => Some(Self::MemberAdded),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdminLogin => "ADMIN_LOGIN",
            Self::AdminLogout => "ADMIN_LOGOUT",
            Self::AdminInviteSent => "ADMIN_INVITE_SENT",
            Self::AdminInviteAccepted => "ADMIN_INVITE_ACCEPTED",
            Self::AdminRemoved => "ADMIN_REMOVED",
            Self::AdminRoleChanged => "ADMIN_ROLE_CHANGED",
            Self::SettingsUpdated => "SETTINGS_UPDATED",
            Self::VehicleAdded => "VEHICLE_ADDED",
            Self::DriverAdded => "DRIVER_ADDED",
            Self::RouteAdded => "ROUTE_ADDED",
            Self::MemberAdded => "MEMBER_ADDED",
        }
    }
}
