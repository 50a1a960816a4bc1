//! Declared sidebar destinations
//!
//! Order is significant: it is the order the sidebar renders.

use super::{NavIcon, NavItem};
use crate::auth::rbac::Permission;

pub static NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        url: "/intern/dashboard",
        icon: NavIcon::LayoutDashboard,
        is_active: true,
        required_permissions: &[Permission::DashboardView],
        children: &[],
    },
    NavItem {
        title: "Campanha",
        url: "/intern/dashboard/campaign",
        icon: NavIcon::Megaphone,
        is_active: false,
        required_permissions: &[Permission::CampaignView],
        children: &[],
    },
    NavItem {
        title: "Leads",
        url: "/intern/dashboard/leads",
        icon: NavIcon::Users,
        is_active: false,
        required_permissions: &[Permission::LeadsView],
        children: &[],
    },
    NavItem {
        title: "Bot",
        url: "/intern/dashboard/bot",
        icon: NavIcon::Bot,
        is_active: false,
        required_permissions: &[Permission::BotView],
        children: &[],
    },
    NavItem {
        title: "Canais",
        url: "/intern/dashboard/emulators",
        icon: NavIcon::Share2,
        is_active: false,
        required_permissions: &[Permission::ChannelsView],
        children: &[],
    },
    NavItem {
        title: "Relatórios",
        url: "/intern/dashboard/reports",
        icon: NavIcon::BarChart2,
        is_active: false,
        required_permissions: &[Permission::ReportsView],
        children: &[],
    },
    // TODO: restore the Configurações entry (settings.view) once the settings page ships.
    NavItem {
        title: "Sistema",
        url: "/intern/dashboard/system",
        icon: NavIcon::Shield,
        is_active: false,
        required_permissions: &[Permission::SystemAdmin],
        children: &[],
    },
];
