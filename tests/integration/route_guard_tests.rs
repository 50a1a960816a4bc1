//! Route guard and dashboard gate integration tests
//!
//! Drive guards through session transitions and record the effects they
//! emit.

#[cfg(test)]
mod tests {
    use dashboard_access::config::AccessConfig;
    use dashboard_access::{
        DashboardDecision, DashboardGate, GuardPhase, GuardView, Permission, PermissionGuard,
        Requirement, RouteGuard, RouteGuardOptions, SessionState, SharedSession,
    };
    use std::time::Duration;

    use crate::common::{NavEvent, RecordingNavigator, RecordingNotifier, SessionFactory};

    // ==================== Route guard ====================

    #[test]
    fn test_denied_user_is_redirected_once_with_one_notice() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new(
            RouteGuardOptions::new(Permission::SystemAdmin),
            &notifier,
            &navigator,
        );

        let session = SessionFactory::with_role("USER");
        let mut rendered = 0;
        for _ in 0..3 {
            if guard.render(&session, || rendered += 1).is_some() {
                panic!("protected content rendered for USER");
            }
        }

        assert_eq!(rendered, 0);
        assert_eq!(guard.phase(), GuardPhase::Denied);
        assert_eq!(navigator.pushes(), vec!["/intern/dashboard".to_string()]);

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].description.contains("USER"));
        assert_eq!(notices[0].duration_ms, 4000);
    }

    #[test]
    fn test_master_renders_without_effects() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new(
            RouteGuardOptions::new(Permission::SystemAdmin),
            &notifier,
            &navigator,
        );

        assert_eq!(
            guard.observe(&SessionFactory::with_role("MASTER")),
            GuardView::Content
        );
        assert!(navigator.events().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_loading_holds_until_role_known() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let shared = SharedSession::new(SessionState::Loading);
        let mut guard = RouteGuard::new(
            RouteGuardOptions::new(Requirement::any([
                Permission::BotView,
                Permission::BotConfigure,
            ])),
            &notifier,
            &navigator,
        );

        assert_eq!(guard.observe_source(&shared), GuardView::Loading);
        assert_eq!(guard.phase(), GuardPhase::Evaluating);
        assert!(navigator.events().is_empty());

        shared.publish(SessionFactory::with_role("ADMIN"));
        assert_eq!(guard.observe_source(&shared), GuardView::Content);
        assert!(navigator.events().is_empty());
    }

    #[test]
    fn test_grant_before_redirect_settles_cancels_it() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new(
            RouteGuardOptions::new(Permission::ReportsAdvanced).show_toast(false),
            &notifier,
            &navigator,
        );

        guard.observe(&SessionFactory::with_role("USER"));
        assert_eq!(guard.pending_redirect(), Some("/intern/dashboard"));

        assert_eq!(
            guard.observe(&SessionFactory::with_role("ADMIN")),
            GuardView::Content
        );
        assert_eq!(guard.pending_redirect(), None);
        assert_eq!(
            navigator.events(),
            vec![
                NavEvent::Push("/intern/dashboard".to_string()),
                NavEvent::Cancel("/intern/dashboard".to_string()),
            ]
        );
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_session_reload_keeps_single_redirect() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let shared = SharedSession::new(SessionFactory::with_role("USER"));
        let mut guard = RouteGuard::new(
            RouteGuardOptions::new(Permission::SystemAdmin),
            &notifier,
            &navigator,
        );

        guard.observe_source(&shared);
        shared.publish(SessionState::Loading);
        guard.observe_source(&shared);
        shared.publish(SessionFactory::with_role("USER"));
        guard.observe_source(&shared);

        assert_eq!(
            navigator.events(),
            vec![NavEvent::Push("/intern/dashboard".to_string())]
        );
        assert_eq!(notifier.notices().len(), 1);
    }

    #[test]
    fn test_options_follow_configuration() {
        let config = AccessConfig {
            landing_path: "/intern/dashboard/leads".to_string(),
            toast_duration_ms: 1500,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let mut guard = RouteGuard::new(
            RouteGuardOptions::from_config(Permission::SettingsBilling, &config),
            &notifier,
            &navigator,
        );

        guard.observe(&SessionFactory::with_role("USER"));
        assert_eq!(navigator.pushes(), vec!["/intern/dashboard/leads".to_string()]);
        assert_eq!(
            notifier.notices()[0].duration_ms,
            Duration::from_millis(1500).as_millis() as u64
        );
    }

    // ==================== Element guard ====================

    #[test]
    fn test_element_guard_is_silent() {
        let guard = PermissionGuard::new(Requirement::all([
            Permission::LeadsView,
            Permission::LeadsDelete,
        ]));

        let user = SessionFactory::with_role("USER");
        assert_eq!(guard.render(&user, || "delete", || "read-only"), "read-only");
        assert_eq!(guard.render_or_empty(&user, || "delete"), None);

        let admin = SessionFactory::with_role("ADMIN");
        assert_eq!(guard.render_or_empty(&admin, || "delete"), Some("delete"));
    }

    // ==================== Dashboard gate ====================

    #[test]
    fn test_dashboard_gate_parks_companyless_guest() {
        let gate = DashboardGate::default();

        assert_eq!(gate.decide(&SessionState::Loading), DashboardDecision::Loading);
        assert_eq!(
            gate.decide(&SessionFactory::guest_without_company()),
            DashboardDecision::Redirect("/intern/pending-company".to_string())
        );
        assert_eq!(
            gate.decide(&SessionFactory::with_role("GUEST")),
            DashboardDecision::Render
        );
    }

    #[test]
    fn test_status_redirect_after_company_assignment() {
        let gate = DashboardGate::default();
        let user = SessionFactory::user("GUEST");

        assert_eq!(
            gate.status_redirect(&user, "/intern/pending-company"),
            Some("/intern/dashboard")
        );
        assert_eq!(gate.status_redirect(&user, "/intern/dashboard"), None);
    }
}
