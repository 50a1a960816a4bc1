//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role
///
/// Exactly one role is active per session. The set is closed and flat: the
/// matrix lists each role's permissions explicitly rather than deriving them
/// from a hierarchy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Master,
    Admin,
    User,
    #[default]
    Guest,
}

/// Fine-grained, dot-namespaced capability identifier
///
/// Permissions are atomic and global: holding `leads.delete` allows deleting
/// any lead, there is no per-record scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "dashboard.view")]
    DashboardView,
    #[serde(rename = "campaign.view")]
    CampaignView,
    #[serde(rename = "campaign.create")]
    CampaignCreate,
    #[serde(rename = "campaign.edit")]
    CampaignEdit,
    #[serde(rename = "campaign.delete")]
    CampaignDelete,
    #[serde(rename = "leads.view")]
    LeadsView,
    #[serde(rename = "leads.export")]
    LeadsExport,
    #[serde(rename = "leads.delete")]
    LeadsDelete,
    #[serde(rename = "lead.create")]
    LeadCreate,
    #[serde(rename = "bot.view")]
    BotView,
    #[serde(rename = "bot.configure")]
    BotConfigure,
    #[serde(rename = "channels.view")]
    ChannelsView,
    #[serde(rename = "channels.create")]
    ChannelsCreate,
    #[serde(rename = "channels.edit")]
    ChannelsEdit,
    #[serde(rename = "channels.delete")]
    ChannelsDelete,
    #[serde(rename = "reports.view")]
    ReportsView,
    #[serde(rename = "reports.advanced")]
    ReportsAdvanced,
    #[serde(rename = "settings.view")]
    SettingsView,
    #[serde(rename = "settings.company")]
    SettingsCompany,
    #[serde(rename = "settings.users")]
    SettingsUsers,
    #[serde(rename = "settings.billing")]
    SettingsBilling,
    #[serde(rename = "system.admin")]
    SystemAdmin,
    #[serde(rename = "system.logs")]
    SystemLogs,
    #[serde(rename = "system.database")]
    SystemDatabase,
    #[serde(rename = "system.backup")]
    SystemBackup,
    #[serde(rename = "system.maintenance")]
    SystemMaintenance,
    #[serde(rename = "emulator.view")]
    EmulatorView,
    #[serde(rename = "emulator.create")]
    EmulatorCreate,
    #[serde(rename = "emulator.delete")]
    EmulatorDelete,
    #[serde(rename = "emulator.refresh")]
    EmulatorRefresh,
    #[serde(rename = "emulator.edit")]
    EmulatorEdit,
}

/// How a list of permissions is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every permission must be held (AND)
    #[default]
    All,
    /// At least one permission must be held (OR)
    Any,
}

/// Permission requirement attached to a guard call site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// A single permission
    Single(Permission),
    /// An ordered list combined with AND or OR semantics
    List {
        permissions: Vec<Permission>,
        mode: MatchMode,
    },
}

/// Outcome of evaluating a requirement against a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Granted,
    Denied,
}

impl Access {
    pub fn is_granted(self) -> bool {
        matches!(self, Access::Granted)
    }
}

impl From<bool> for Access {
    fn from(granted: bool) -> Self {
        if granted {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether the requirement is satisfied
    pub granted: bool,
    /// Role the requirement was evaluated against
    pub role: Role,
    /// Combination mode that was applied
    pub mode: MatchMode,
    /// Required permissions the role does not hold
    pub missing: Vec<Permission>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
