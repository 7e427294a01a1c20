//! Static route table
//!
//! Two ordered lists: the primary navigation and the bottom section.
//! Indices used by the entrance animation run over `ROUTES ++ BOTTOM_ROUTES`.

use crate::ui::icons::IconId;

/// A single navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub title: &'static str,
    pub icon: IconId,
    pub path: &'static str,
}

impl RouteEntry {
    const fn new(title: &'static str, icon: IconId, path: &'static str) -> Self {
        Self { title, icon, path }
    }
}

/// Primary navigation
pub const ROUTES: [RouteEntry; 6] = [
    RouteEntry::new("Home", IconId::House, "/"),
    RouteEntry::new("Sales", IconId::ChartLine, "/sales"),
    RouteEntry::new("Costs", IconId::ChartColumn, "/costs"),
    RouteEntry::new("Payments", IconId::Wallet, "/payments"),
    RouteEntry::new("Finances", IconId::ChartPie, "/finances"),
    RouteEntry::new("Messages", IconId::Envelope, "/messages"),
];

/// Secondary navigation pinned to the bottom of the sidebar
pub const BOTTOM_ROUTES: [RouteEntry; 2] = [
    RouteEntry::new("Settings", IconId::Sliders, "/settings"),
    RouteEntry::new("Support", IconId::PhoneVolume, "/support"),
];

/// Total number of nav items rendered
pub const ROUTE_COUNT: usize = ROUTES.len() + BOTTOM_ROUTES.len();

/// Path highlighted when the sidebar mounts
pub const DEFAULT_PATH: &str = "/";

/// All routes with their global index (primary first, then bottom)
pub fn all_routes() -> impl Iterator<Item = (usize, &'static RouteEntry)> {
    ROUTES.iter().chain(BOTTOM_ROUTES.iter()).enumerate()
}

/// Find a route by path
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    all_routes().map(|(_, r)| r).find(|r| r.path == path)
}
