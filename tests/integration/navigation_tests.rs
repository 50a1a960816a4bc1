//! Navigation filtering integration tests

#[cfg(test)]
mod tests {
    use dashboard_access::navigation::{NAVIGATION, filtered_navigation, is_reachable};
    use dashboard_access::{Role, has_all_permissions};

    fn titles(role: Role) -> Vec<&'static str> {
        filtered_navigation(role).iter().map(|e| e.title).collect()
    }

    #[test]
    fn test_master_sees_every_entry() {
        assert_eq!(filtered_navigation(Role::Master).len(), NAVIGATION.len());
    }

    #[test]
    fn test_admin_misses_only_system() {
        assert_eq!(
            titles(Role::Admin),
            vec!["Dashboard", "Campanha", "Leads", "Bot", "Canais", "Relatórios"]
        );
    }

    #[test]
    fn test_user_loses_bot_and_system() {
        assert_eq!(
            titles(Role::User),
            vec!["Dashboard", "Campanha", "Leads", "Canais", "Relatórios"]
        );
    }

    #[test]
    fn test_guest_sees_dashboard_only() {
        assert_eq!(titles(Role::Guest), vec!["Dashboard"]);
    }

    #[test]
    fn test_filtered_entries_are_ordered_subsequence() {
        for role in Role::ALL {
            let visible = filtered_navigation(role);
            let mut declared = NAVIGATION.iter();
            for entry in &visible {
                assert!(
                    declared.any(|item| item.url == entry.url),
                    "{} out of order for {}",
                    entry.url,
                    role
                );
                assert!(has_all_permissions(role, entry.required_permissions));
            }
        }
    }

    #[test]
    fn test_landing_page_is_reachable_by_every_role() {
        for role in Role::ALL {
            assert_eq!(is_reachable(role, "/intern/dashboard"), Some(true));
        }
        assert_eq!(is_reachable(Role::User, "/intern/dashboard/system"), Some(false));
        assert_eq!(is_reachable(Role::User, "/intern/pending-company"), None);
    }

    #[test]
    fn test_navigation_serializes_for_clients() {
        let json = serde_json::to_value(filtered_navigation(Role::Guest)).unwrap();
        assert_eq!(json[0]["url"], "/intern/dashboard");
        assert_eq!(json[0]["isActive"], true);
        assert_eq!(json[0]["requiredPermissions"], serde_json::json!(["dashboard.view"]));
    }
}
