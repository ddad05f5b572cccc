//! The console's page table.
//!
//! Every appliance page is mounted twice: under `/standalone` when the UI
//! runs on the unit itself, and under `/controller/manage/:unit_name` when a
//! controller manages the unit remotely.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::routes::RouteTable;

/// Where the console is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    /// On the appliance itself.
    #[default]
    Standalone,
    /// On a controller managing several appliances.
    Controller,
}

impl ConsoleMode {
    /// The root path the console opens on.
    pub const fn home(self) -> &'static str {
        match self {
            Self::Standalone => "/standalone",
            Self::Controller => "/controller",
        }
    }
}

/// Appliance pages: path below the mount point, route name suffix, view.
pub const UNIT_PAGES: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "views/standalone/StandaloneDashboardView"),
    ("system/subscription", "Subscription", "views/standalone/system/SubscriptionView"),
    ("system/systemSettings", "SystemSettings", "views/standalone/system/SystemSettingsView"),
    ("system/services", "Services", "views/standalone/system/ServicesView"),
    ("system/ssh", "SSH", "views/standalone/system/SSHView"),
    ("system/backup-and-restore", "BackupAndRestore", "views/standalone/system/BackupAndRestoreView"),
    ("system/reboot-and-shutdown", "RebootAndShutdown", "views/standalone/system/RebootAndShutdownView"),
    ("network/interfaces-and-devices", "Interfaces", "views/standalone/network/InterfacesAndDevicesView"),
    ("network/dns-dhcp", "DNSAndDHCP", "views/standalone/network/DnsDhcpView"),
    ("network/multi-wan", "MultiWAN", "views/standalone/network/MultiWanView"),
    ("network/routes", "Routes", "views/standalone/network/RoutesView"),
    ("network/hotspot", "Hotspot", "views/standalone/network/HotspotView"),
    ("firewall/zones-and-policies", "ZonesAndPolicies", "views/standalone/firewall/ZonesAndPolicies"),
    ("firewall/port-forward", "PortForward", "views/standalone/firewall/PortForward"),
    ("security/flashstart", "FlashStart", "views/standalone/security/FlashStartView"),
    ("security/dpi", "Dpi", "views/standalone/security/DpiFilterView"),
    ("system/storage", "Storage", "views/standalone/system/StorageView"),
    ("vpn", "Vpn", "views/standalone/VpnView"),
    ("vpn/openvpn-tunnel", "OpenVPNTunnel", "views/standalone/vpn/OpenvpnTunnelView"),
    ("vpn/ipsec-tunnel", "IPsecTunnel", "views/standalone/vpn/IPsecTunnelView"),
    ("logs", "Logs", "views/standalone/LogsView"),
    ("report", "Report", "views/standalone/ReportView"),
    ("user", "UserManagement", "views/standalone/UserManagement"),
];

const MANAGE_ROOT: &str = "/controller/manage/:unit_name";

/// Builds the console routing table for `mode`.
///
/// Both page trees are always present; `mode` only decides where `/`
/// leads.
pub fn console_routes(mode: ConsoleMode) -> Result<RouteTable, RouteError> {
    let mut builder = RouteTable::builder()
        .redirect("/", mode.home())
        .redirect("/standalone", "/standalone/dashboard");

    for (path, name, view) in UNIT_PAGES {
        builder = builder.route(&format!("/standalone/{path}"), format!("Standalone{name}"), *view);
    }

    builder = builder
        .redirect("/controller", "/controller/dashboard")
        .route(
            "/controller/dashboard",
            "ControllerDashboard",
            "views/controller/ControllerDashboardView",
        )
        .route("/controller/logs", "ControllerLogs", "views/controller/LogsView")
        .route(
            "/controller/settings",
            "ControllerSettings",
            "views/controller/SettingsView",
        )
        .redirect(MANAGE_ROOT, &format!("{MANAGE_ROOT}/dashboard"));

    for (path, name, view) in UNIT_PAGES {
        builder = builder.route(
            &format!("{MANAGE_ROOT}/{path}"),
            format!("ControllerManage{name}"),
            *view,
        );
    }

    builder.build()
}
