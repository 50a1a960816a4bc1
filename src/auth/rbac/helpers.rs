//! Per-session permission helpers

use crate::auth::session::{SessionSource, SessionState, SessionUser};
use crate::navigation::{NavigationEntry, filtered_navigation};

use super::system::{evaluate, has_all_permissions, has_any_permission, has_permission};
use super::types::{Access, Permission, Role, Requirement};

/// Permission checks bound to one session snapshot
///
/// Build a fresh context for every decision pass (`PermissionContext::current`);
/// holding one across a login, logout or company assignment would keep the
/// old role.
#[derive(Debug, Clone)]
pub struct PermissionContext {
    role: Role,
    user: Option<SessionUser>,
}

impl PermissionContext {
    /// Context for an already captured snapshot
    pub fn new(state: &SessionState) -> Self {
        Self {
            role: state.effective_role(),
            user: state.user().cloned(),
        }
    }

    /// Context for the latest state published by `source`
    pub fn current<S: SessionSource + ?Sized>(source: &S) -> Self {
        Self::new(&source.snapshot())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(self.role, permission)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        has_all_permissions(self.role, permissions)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        has_any_permission(self.role, permissions)
    }

    pub fn evaluate(&self, requirement: &Requirement) -> Access {
        evaluate(self.role, requirement)
    }

    pub fn filtered_navigation(&self) -> Vec<NavigationEntry> {
        filtered_navigation(self.role)
    }

    pub fn user_permissions(&self) -> &'static [Permission] {
        self.role.permissions()
    }

    pub fn can_view_dashboard(&self) -> bool {
        self.has_permission(Permission::DashboardView)
    }

    pub fn can_manage_campaigns(&self) -> bool {
        self.has_permission(Permission::CampaignCreate)
    }

    pub fn can_delete_leads(&self) -> bool {
        self.has_permission(Permission::LeadsDelete)
    }

    pub fn can_create_lead(&self) -> bool {
        self.has_permission(Permission::LeadCreate)
    }

    pub fn can_configure_bot(&self) -> bool {
        self.has_permission(Permission::BotConfigure)
    }

    pub fn can_manage_users(&self) -> bool {
        self.has_permission(Permission::SettingsUsers)
    }

    pub fn can_view_advanced_reports(&self) -> bool {
        self.has_permission(Permission::ReportsAdvanced)
    }

    pub fn can_access_system(&self) -> bool {
        self.has_permission(Permission::SystemAdmin)
    }

    pub fn can_view_system_logs(&self) -> bool {
        self.has_permission(Permission::SystemLogs)
    }

    pub fn can_manage_database(&self) -> bool {
        self.has_permission(Permission::SystemDatabase)
    }

    pub fn can_view_emulator(&self) -> bool {
        self.has_permission(Permission::EmulatorView)
    }

    pub fn can_create_emulator(&self) -> bool {
        self.has_permission(Permission::EmulatorCreate)
    }

    pub fn can_delete_emulator(&self) -> bool {
        self.has_permission(Permission::EmulatorDelete)
    }

    pub fn can_edit_emulator(&self) -> bool {
        self.has_permission(Permission::EmulatorEdit)
    }

    pub fn can_refresh_emulator(&self) -> bool {
        self.has_permission(Permission::EmulatorRefresh)
    }

    pub fn is_master(&self) -> bool {
        self.role == Role::Master
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_guest(&self) -> bool {
        self.role == Role::Guest
    }
}
