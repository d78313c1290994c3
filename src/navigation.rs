use strum::{AsRefStr, Display};

use crate::view_state::Overlay;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum NavAction {
    OpenPujaCatalog,
}

impl NavAction {
    pub fn overlay(&self) -> Overlay {
        match self {
            NavAction::OpenPujaCatalog => Overlay::Catalog,
        }
    }

    /// Link used when scripts are unavailable; reopens the current page with the overlay.
    pub fn href(&self) -> String {
        format!("?overlay={}", self.overlay())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link {
        label: &'static str,
        icon: &'static str,
        path: &'static str,
    },
    Action {
        label: &'static str,
        icon: &'static str,
        action: NavAction,
    },
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Link { label, .. } | NavItem::Action { label, .. } => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::Link { icon, .. } | NavItem::Action { icon, .. } => icon,
        }
    }

    /// Destination path; empty for actions.
    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Link { path, .. } => path,
            NavItem::Action { .. } => "",
        }
    }

    pub fn href(&self) -> String {
        match self {
            NavItem::Link { path, .. } => (*path).to_owned(),
            NavItem::Action { action, .. } => action.href(),
        }
    }

    pub fn action(&self) -> Option<NavAction> {
        match self {
            NavItem::Link { .. } => None,
            NavItem::Action { action, .. } => Some(*action),
        }
    }
}

const fn link(label: &'static str, icon: &'static str, path: &'static str) -> NavItem {
    NavItem::Link { label, icon, path }
}

pub static HEADER: &[NavItem] = &[
    link("Daily Darshan", "home", "/daily-darshan"),
    NavItem::Action {
        label: "All Pujas",
        icon: "ticket",
        action: NavAction::OpenPujaCatalog,
    },
    link("Horoscope", "sun", "/horoscope"),
    link("Aarti & Chalisa", "music", "/aarti-chalisa"),
    link("Shop", "shopping-bag", "/shop"),
    link("Share App", "share", "/share"),
    link("Settings", "settings", "/settings"),
];

/// Scroll offset in pixels past which the sub-header is compacted.
pub const SUBHEADER_COMPACT_AFTER: u32 = 80;

pub static SUBHEADER: &[NavItem] = &[
    link("Live Darshan", "home", "/live-darshan"),
    link("Horoscope", "sun", "/horoscope"),
    link("Aarti & Chalisa", "music", "/aarti-chalisa"),
    link("Book Pooja", "book", "/pujas"),
    link("Panchang", "calendar", "/panchang"),
    link("Festivals", "sparkles", "/festivals"),
    link("Temples", "church", "/temples"),
    link("Donation", "heart", "/donate"),
    link("Aarti Timing", "clock", "/aarti-timings"),
    link("Pooja Shop", "gift", "/shop"),
    link("Community", "users", "/community"),
    link("Alerts", "bell", "/notifications"),
];

pub static QUICK_LINKS: &[NavItem] = &[
    link("Home", "", "/"),
    link("Live Darshan", "", "/live-darshan"),
    link("All Temples", "", "/temples"),
    link("Daily Pooja", "", "/daily-pooja"),
    link("Aarti Timings", "", "/aarti-timings"),
    link("Donate", "", "/donate"),
    link("Contact Us", "", "/contact"),
];

pub static LEGAL_LINKS: &[NavItem] = &[
    link("Privacy Policy", "", "/privacy-policy"),
    link("Terms & Conditions", "", "/terms"),
    link("Refund Policy", "", "/refund-policy"),
];

/// Decorative; not wired to any translation.
pub static LANGUAGES: [&str; 4] = ["English", "हिन्दी", "ગુજરાતી", "मराठी"];
