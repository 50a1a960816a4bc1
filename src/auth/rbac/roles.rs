//! Roles and the role-permission matrix

use crate::utils::error::AccessError;
use std::str::FromStr;
use tracing::debug;

use super::types::{Permission, Role};
use Permission::*;

const MASTER_PERMISSIONS: &[Permission] = &[
    DashboardView,
    CampaignView,
    CampaignCreate,
    CampaignEdit,
    CampaignDelete,
    LeadsView,
    LeadsExport,
    LeadsDelete,
    BotView,
    BotConfigure,
    ChannelsView,
    ChannelsCreate,
    ChannelsEdit,
    ChannelsDelete,
    ReportsView,
    ReportsAdvanced,
    SettingsView,
    SettingsCompany,
    SettingsUsers,
    SettingsBilling,
    // system.* is exclusive to MASTER
    SystemAdmin,
    SystemLogs,
    SystemDatabase,
    SystemBackup,
    SystemMaintenance,
    EmulatorView,
    EmulatorCreate,
    EmulatorDelete,
    EmulatorEdit,
    EmulatorRefresh,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    DashboardView,
    CampaignView,
    CampaignCreate,
    CampaignEdit,
    CampaignDelete,
    LeadsView,
    LeadsExport,
    LeadsDelete,
    BotView,
    BotConfigure,
    ChannelsView,
    ChannelsCreate,
    ChannelsEdit,
    ChannelsDelete,
    ReportsView,
    ReportsAdvanced,
    SettingsView,
    SettingsCompany,
    SettingsUsers,
    SettingsBilling,
    EmulatorView,
    EmulatorRefresh,
];

const USER_PERMISSIONS: &[Permission] = &[
    DashboardView,
    CampaignView,
    CampaignEdit,
    LeadsView,
    // no bot access
    ChannelsView,
    ReportsView,
    SettingsView,
    EmulatorView,
    EmulatorRefresh,
];

// Pending-company landing page only.
const GUEST_PERMISSIONS: &[Permission] = &[DashboardView];

impl Role {
    /// Every role, most privileged first
    pub const ALL: [Role; 4] = [Role::Master, Role::Admin, Role::User, Role::Guest];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "MASTER",
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Guest => "GUEST",
        }
    }

    /// Exact permission set granted to this role
    pub const fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Master => MASTER_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
            Role::User => USER_PERMISSIONS,
            Role::Guest => GUEST_PERMISSIONS,
        }
    }

    /// Resolve the role claimed by a session
    ///
    /// Absent or unrecognised values fall back to [`Role::Guest`].
    pub fn resolve(raw: Option<&str>) -> Role {
        match raw.map(Role::from_str) {
            Some(Ok(role)) => role,
            Some(Err(_)) => {
                debug!(role = ?raw, "Unrecognised role, falling back to GUEST");
                Role::Guest
            }
            None => Role::Guest,
        }
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASTER" => Ok(Role::Master),
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            "GUEST" => Ok(Role::Guest),
            _ => Err(AccessError::UnknownRole(s.to_string())),
        }
    }
}
