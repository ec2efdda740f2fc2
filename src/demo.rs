//! Static demo data for a single session.
//!
//! Everything here is fixed: there is no persistence, and only the sync
//! fallback ever ends up in the record store's sync cache.

use crate::store::{Record, SyncItem, SyncItemId};

/// Attribute keys used on ticket records
pub mod ticket {
    pub const HOLDER: &str = "holder";
    pub const SHOW: &str = "show";
    pub const TIER: &str = "tier";
    pub const PRICE: &str = "price";
    pub const STATUS: &str = "status";
    pub const DATE: &str = "date";
}

pub fn tickets() -> Vec<Record> {
    [
        ("#TK-9284", "Sara Mahmoud", "Aida Opera", "Royal VIP", "$450", "active", "22/05/2024"),
        ("#TK-9285", "Ali Al-Qahtani", "Aida Opera", "Golden Circle", "$220", "checked in", "22/05/2024"),
        ("#TK-9286", "Layla Hassan", "Piano Night", "Standard", "$90", "cancelled", "21/05/2024"),
        ("#TK-9287", "Fahd Al-Harbi", "Aida Opera", "Royal VIP", "$450", "active", "21/05/2024"),
    ]
    .into_iter()
    .map(|(id, holder, show, tier, price, status, date)| {
        Record::new(
            id,
            [
                (ticket::HOLDER, holder),
                (ticket::SHOW, show),
                (ticket::TIER, tier),
                (ticket::PRICE, price),
                (ticket::STATUS, status),
                (ticket::DATE, date),
            ],
        )
    })
    .collect()
}

/// Dataset substituted when the sync endpoint is unavailable
pub fn sync_fallback() -> Vec<SyncItem> {
    [
        (1, "Gate A sales sync", "1,240 tickets", "complete", "1 minute ago"),
        (2, "Lobby sensor link", "live", "connected", "real time"),
        (3, "Concessions inventory update", "92%", "stable", "5 minutes ago"),
        (4, "Smart lighting control", "stage mode", "active", "10 minutes ago"),
    ]
    .into_iter()
    .map(|(id, name, value, status, last_updated)| SyncItem {
        id: SyncItemId::Number(id),
        name: name.to_string(),
        value: value.to_string(),
        status: status.to_string(),
        last_updated: last_updated.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub target: &'static str,
    pub change: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi { label: "Net revenue per seat", value: "$242", target: "$210", change: "+14.2%" },
    Kpi { label: "Live occupancy", value: "88.4%", target: "85.0%", change: "+5.1%" },
    Kpi { label: "Forecast accuracy", value: "96.4%", target: "94.0%", change: "stable" },
    Kpi { label: "System security", value: "hardened", target: "secure", change: "active" },
];

#[derive(Debug, Clone, Copy)]
pub struct Show {
    pub title: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub occupancy: &'static str,
}

pub const SHOWS: [Show; 3] = [
    Show { title: "Aida Opera", date: "24 May 2024", status: "Active", occupancy: "92%" },
    Show { title: "Piano Night", date: "28 May 2024", status: "Booking", occupancy: "64%" },
    Show { title: "Hamlet: A Modern Vision", date: "02 Jun 2024", status: "Booking", occupancy: "41%" },
];

#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub name: &'static str,
    pub occupancy: u8,
    pub revenue: &'static str,
    pub capacity: u16,
}

pub const ZONES: [Zone; 7] = [
    Zone { name: "Royal suite - right", occupancy: 100, revenue: "$12,400", capacity: 12 },
    Zone { name: "Royal suite - left", occupancy: 92, revenue: "$11,200", capacity: 12 },
    Zone { name: "Orchestra - front", occupancy: 98, revenue: "$45,000", capacity: 64 },
    Zone { name: "Orchestra - middle", occupancy: 84, revenue: "$38,500", capacity: 96 },
    Zone { name: "Orchestra - rear", occupancy: 70, revenue: "$22,000", capacity: 120 },
    Zone { name: "First balcony", occupancy: 88, revenue: "$28,400", capacity: 80 },
    Zone { name: "Second balcony", occupancy: 62, revenue: "$12,500", capacity: 100 },
];

/// Engagement per act: (segment, engagement %, state)
pub const SEGMENTS: [(&str, u8, &str); 4] = [
    ("Act I: The Beginning", 95, "done"),
    ("Scene II: The Epic Dialogue", 82, "done"),
    ("Act III: The Confrontation", 98, "now"),
    ("Scene IV: The Resolution", 64, "expected"),
];

/// Seven-day demand forecast: (day, score, trend)
pub const FORECAST: [(&str, u8, u8); 7] = [
    ("Mon", 85, 80),
    ("Tue", 60, 65),
    ("Wed", 92, 88),
    ("Thu", 98, 95),
    ("Fri", 100, 98),
    ("Sat", 95, 92),
    ("Sun", 88, 85),
];

/// Camera feeds: (location, foot traffic)
pub const CAMERAS: [(&str, &str); 4] = [
    ("Main gate - A", "42 p/m"),
    ("Side gate - B", "12 p/m"),
    ("North lobby", "85 p/m"),
    ("VIP area", "5 p/m"),
];

/// Recent monitoring alerts: (time, message)
pub const ALERTS: [(&str, &str); 3] = [
    ("18:42:01", "Increased flow in the north lobby"),
    ("18:40:15", "Recognition: 5 VIP members entered"),
    ("18:32:10", "Alert: unusual crowding at exit 2"),
];
