//! Access decision integration tests
//!
//! Verify the role matrix through the public decision functions.

#[cfg(test)]
mod tests {
    use dashboard_access::{
        MatchMode, Permission, PermissionContext, Requirement, Role, SessionState, SharedSession,
        check_detailed, evaluate, has_all_permissions, has_any_permission, has_permission,
    };

    use crate::common::SessionFactory;

    // ==================== Matrix ====================

    #[test]
    fn test_every_granted_permission_is_in_catalog() {
        for role in Role::ALL {
            for permission in role.permissions() {
                assert!(Permission::ALL.contains(permission));
            }
        }
    }

    #[test]
    fn test_master_holds_everything_but_lead_create() {
        for permission in Permission::ALL {
            let expected = permission != Permission::LeadCreate;
            assert_eq!(
                has_permission(Role::Master, permission),
                expected,
                "{}",
                permission
            );
        }
    }

    #[test]
    fn test_system_domain_is_master_only() {
        let system: Vec<Permission> = Permission::ALL
            .into_iter()
            .filter(|p| p.domain() == "system")
            .collect();
        assert_eq!(system.len(), 5);

        for role in [Role::Admin, Role::User, Role::Guest] {
            assert!(!has_any_permission(role, &system), "{}", role);
        }
        assert!(has_all_permissions(Role::Master, &system));
    }

    #[test]
    fn test_guest_only_views_dashboard() {
        assert_eq!(Role::Guest.permissions(), &[Permission::DashboardView]);
        assert!(!has_permission(Role::Guest, Permission::CampaignView));
    }

    #[test]
    fn test_user_cannot_touch_bot() {
        assert!(!has_any_permission(
            Role::User,
            &[Permission::BotView, Permission::BotConfigure]
        ));
        assert!(has_permission(Role::User, Permission::CampaignEdit));
        assert!(!has_permission(Role::User, Permission::CampaignCreate));
    }

    // ==================== Combinators ====================

    #[test]
    fn test_empty_lists() {
        for role in Role::ALL {
            assert!(has_all_permissions(role, &[]));
            assert!(!has_any_permission(role, &[]));
        }
    }

    #[test]
    fn test_all_and_any_examples() {
        let perms = [Permission::SystemAdmin, Permission::DashboardView];
        assert!(!has_all_permissions(Role::User, &perms));
        assert!(has_any_permission(Role::User, &perms));
        assert!(has_all_permissions(Role::Master, &perms));
    }

    #[test]
    fn test_evaluate_matches_direct_functions() {
        let perms = vec![Permission::LeadsExport, Permission::ReportsAdvanced];
        for role in Role::ALL {
            assert_eq!(
                evaluate(role, &Requirement::all(perms.clone())).is_granted(),
                has_all_permissions(role, &perms)
            );
            assert_eq!(
                evaluate(role, &Requirement::any(perms.clone())).is_granted(),
                has_any_permission(role, &perms)
            );
        }
    }

    #[test]
    fn test_detailed_check_lists_missing_in_order() {
        let requirement = Requirement::all([
            Permission::SystemLogs,
            Permission::DashboardView,
            Permission::BotView,
        ]);
        let check = check_detailed(Role::User, &requirement);

        assert!(!check.granted);
        assert_eq!(check.mode, MatchMode::All);
        assert_eq!(check.missing, vec![Permission::SystemLogs, Permission::BotView]);
        assert!(check.denial_reason.unwrap().contains("system.logs"));
    }

    #[test]
    fn test_parse_requirement_from_identifiers() {
        let perms = Permission::parse_list("campaign.view, leads.view").unwrap();
        assert!(evaluate(Role::User, &Requirement::all(perms)).is_granted());
        assert!(Permission::parse_list("campaign.view,campaign.launch").is_err());
    }

    // ==================== Session-bound context ====================

    #[test]
    fn test_unknown_role_claim_is_treated_as_guest() {
        let ctx = PermissionContext::new(&SessionFactory::with_role("SUPERUSER"));
        assert_eq!(ctx.role(), Role::Guest);
        assert!(ctx.can_view_dashboard());
        assert!(!ctx.can_manage_campaigns());
    }

    #[test]
    fn test_context_tracks_published_sessions() {
        let shared = SharedSession::new(SessionState::Loading);
        assert!(PermissionContext::current(&shared).is_guest());

        shared.publish(SessionFactory::with_role("ADMIN"));
        let ctx = PermissionContext::current(&shared);
        assert!(ctx.is_admin());
        assert!(ctx.can_manage_users());
        assert!(!ctx.can_access_system());

        shared.publish(SessionFactory::with_role("MASTER"));
        assert!(PermissionContext::current(&shared).can_manage_database());
    }
}
