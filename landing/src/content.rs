//! Page copy and sample data.
//!
//! Everything the page displays lives here as literal constants so the
//! sections stay pure markup.

use crate::components::icons;

/// Product name shown in the header and footer
pub const BRAND: &str = "FleetOS";

/// A same-page navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "Operations", href: "#operations" },
    NavItem { label: "Fuel", href: "#fuel" },
    NavItem { label: "Invoicing", href: "#invoicing" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Headline figure in the hero grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { label: "Breakdown Cost Saved", value: "₹25K/mo" },
    HeroStat { label: "Fuel Efficiency Gain", value: "+6.4%" },
    HeroStat { label: "Faster Payments", value: "12→5 days" },
    HeroStat { label: "Uptime", value: "99.2%" },
];

/// Icon-backed tile on the dashboard preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStat {
    pub icon: &'static [&'static str],
    pub label: &'static str,
    pub value: &'static str,
}

pub const DASHBOARD_STATS: &[DashboardStat] = &[
    DashboardStat { icon: icons::ACTIVITY, label: "Active Faults", value: "2 Critical" },
    DashboardStat { icon: icons::FUEL, label: "Fuel Economy", value: "3.9 → 4.2 km/l" },
    DashboardStat { icon: icons::GAUGE, label: "Tyre Pressure", value: "-12% Rear-R" },
];

/// One sample vehicle in the dashboard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetRow {
    pub vehicle: &'static str,
    pub health: &'static str,
    pub fuel: &'static str,
    pub status: &'static str,
}

pub const FLEET_COLUMNS: [&str; 4] = ["Vehicle", "Health", "Fuel", "Status"];

pub const FLEET_ROWS: &[FleetRow] = &[
    FleetRow {
        vehicle: "MH12 AB 1234",
        health: "DTC P2457 (EGR)",
        fuel: "4.1 km/l",
        status: "In Transit",
    },
    FleetRow {
        vehicle: "MH48 XY 4421",
        health: "OK",
        fuel: "4.4 km/l",
        status: "Loading",
    },
    FleetRow {
        vehicle: "GJ01 CF 9981",
        health: "Tyre -10%",
        fuel: "3.8 km/l",
        status: "Idle 36m",
    },
];

/// Feature card copy. `anchor` becomes the card's element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static [&'static str],
    pub title: &'static str,
    pub tag: Option<&'static str>,
    pub points: &'static [&'static str],
    pub anchor: Option<&'static str>,
}

/// Cards under `#operations`
pub const OPERATIONS_FEATURES: &[Feature] = &[
    Feature {
        icon: icons::ACTIVITY,
        title: "Predictive Maintenance",
        tag: Some("Reduce Downtime"),
        points: &[
            "Live engine health & fault codes (J1939/CAN ready)",
            "Rule-based alerts for overheating, oil, DPF, batteries",
            "Work orders with parts, labor, downtime tracking",
        ],
        anchor: None,
    },
    Feature {
        icon: icons::FUEL,
        title: "Fuel Intelligence",
        tag: Some("Save Fuel"),
        points: &[
            "Idle detection and cost attribution",
            "Tyre pressure impact on FE (10% drop → ~1% loss)",
            "Driver behavior (overspeed, harsh accel/brake) flags",
        ],
        anchor: Some("fuel"),
    },
];

/// Cards under `#invoicing`
pub const INVOICING_FEATURES: &[Feature] = &[
    Feature {
        icon: icons::RECEIPT,
        title: "GST-Compliant Invoicing",
        tag: Some("Get Paid Faster"),
        points: &[
            "Auto-generate from trip distance, idle, waiting",
            "CGST/SGST/IGST breakup + e-Invoicing JSON payload",
            "Dispute center, reminders, and payment tracking",
        ],
        anchor: None,
    },
    Feature {
        icon: icons::SHIELD_CHECK,
        title: "Audit-Ready Records",
        tag: None,
        points: &[
            "Trip, LR, POD, and invoice linked end-to-end",
            "Tamper-resistant history and approvals",
            "Download branded PDF with QR",
        ],
        anchor: None,
    },
];

pub const CTA_BENEFITS: &[&str] = &[
    "Onboarding under 1 week",
    "Device-ready (CAN/J1939)",
    "GST-compliant billing",
    "Works with any GPS",
];

/// Choices in the contact form's "What do you want to improve?" select
pub const IMPROVEMENT_OPTIONS: &[&str] = &[
    "Breakdowns & maintenance",
    "Fuel efficiency",
    "Invoicing & payments",
    "All of the above",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn nav_items_are_unique_in_page_anchors() {
        let mut seen = HashSet::new();
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('#'), "{} is not an in-page link", item.href);
            assert!(item.href.len() > 1, "{} has an empty fragment", item.label);
            assert!(seen.insert(item.href), "duplicate href {}", item.href);
        }
    }

    #[test]
    fn every_fleet_row_fills_all_columns() {
        assert_eq!(FLEET_ROWS.len(), 3);
        for row in FLEET_ROWS {
            for cell in [row.vehicle, row.health, row.fuel, row.status] {
                assert!(!cell.is_empty());
            }
        }
    }

    #[test]
    fn feature_cards_have_three_points() {
        for feature in OPERATIONS_FEATURES.iter().chain(INVOICING_FEATURES) {
            assert_eq!(feature.points.len(), 3, "{}", feature.title);
        }
    }

    #[test]
    fn fuel_nav_target_is_carried_by_a_card() {
        let anchors: Vec<_> = OPERATIONS_FEATURES
            .iter()
            .chain(INVOICING_FEATURES)
            .filter_map(|f| f.anchor)
            .collect();
        assert_eq!(anchors, vec!["fuel"]);
    }
}
