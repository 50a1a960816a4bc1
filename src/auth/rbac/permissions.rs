//! Permission catalog

use crate::utils::error::AccessError;
use std::str::FromStr;

use super::types::Permission;

impl Permission {
    /// Every permission in the catalog, in declaration order
    pub const ALL: [Permission; 31] = [
        Permission::DashboardView,
        Permission::CampaignView,
        Permission::CampaignCreate,
        Permission::CampaignEdit,
        Permission::CampaignDelete,
        Permission::LeadsView,
        Permission::LeadsExport,
        Permission::LeadsDelete,
        Permission::LeadCreate,
        Permission::BotView,
        Permission::BotConfigure,
        Permission::ChannelsView,
        Permission::ChannelsCreate,
        Permission::ChannelsEdit,
        Permission::ChannelsDelete,
        Permission::ReportsView,
        Permission::ReportsAdvanced,
        Permission::SettingsView,
        Permission::SettingsCompany,
        Permission::SettingsUsers,
        Permission::SettingsBilling,
        Permission::SystemAdmin,
        Permission::SystemLogs,
        Permission::SystemDatabase,
        Permission::SystemBackup,
        Permission::SystemMaintenance,
        Permission::EmulatorView,
        Permission::EmulatorCreate,
        Permission::EmulatorDelete,
        Permission::EmulatorRefresh,
        Permission::EmulatorEdit,
    ];

    /// Wire identifier, e.g. `campaign.create`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::DashboardView => "dashboard.view",
            Permission::CampaignView => "campaign.view",
            Permission::CampaignCreate => "campaign.create",
            Permission::CampaignEdit => "campaign.edit",
            Permission::CampaignDelete => "campaign.delete",
            Permission::LeadsView => "leads.view",
            Permission::LeadsExport => "leads.export",
            Permission::LeadsDelete => "leads.delete",
            Permission::LeadCreate => "lead.create",
            Permission::BotView => "bot.view",
            Permission::BotConfigure => "bot.configure",
            Permission::ChannelsView => "channels.view",
            Permission::ChannelsCreate => "channels.create",
            Permission::ChannelsEdit => "channels.edit",
            Permission::ChannelsDelete => "channels.delete",
            Permission::ReportsView => "reports.view",
            Permission::ReportsAdvanced => "reports.advanced",
            Permission::SettingsView => "settings.view",
            Permission::SettingsCompany => "settings.company",
            Permission::SettingsUsers => "settings.users",
            Permission::SettingsBilling => "settings.billing",
            Permission::SystemAdmin => "system.admin",
            Permission::SystemLogs => "system.logs",
            Permission::SystemDatabase => "system.database",
            Permission::SystemBackup => "system.backup",
            Permission::SystemMaintenance => "system.maintenance",
            Permission::EmulatorView => "emulator.view",
            Permission::EmulatorCreate => "emulator.create",
            Permission::EmulatorDelete => "emulator.delete",
            Permission::EmulatorRefresh => "emulator.refresh",
            Permission::EmulatorEdit => "emulator.edit",
        }
    }

    /// Namespace half of the identifier (`campaign` in `campaign.create`)
    pub fn domain(&self) -> &'static str {
        self.split().0
    }

    /// Action half of the identifier (`create` in `campaign.create`)
    pub fn action(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let id = self.as_str();
        // Every catalog identifier carries exactly one dot.
        id.split_once('.').unwrap_or((id, ""))
    }

    /// Parse a comma separated list such as `campaign.view,leads.view`
    pub fn parse_list(input: &str) -> Result<Vec<Permission>, AccessError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Permission::from_str)
            .collect()
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}
