//! Category catalogue
//!
//! Categories are a fixed, ordered list. Transactions reference them by key;
//! the order of [`CATEGORIES`] is the order used by the monthly summary.

use serde::Serialize;
use std::fmt;

/// A transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable key stored on transactions
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Feather icon name
    pub icon: &'static str,
    /// Hex colour used by the chart and the list
    pub color: &'static str,
}

/// The canonical categories, in display order
pub const CATEGORIES: [Category; 6] = [
    Category {
        key: "purchases",
        name: "Purchases",
        icon: "shopping-bag",
        color: "#5636D3",
    },
    Category {
        key: "food",
        name: "Food",
        icon: "coffee",
        color: "#FF872C",
    },
    Category {
        key: "salary",
        name: "Salary",
        icon: "dollar-sign",
        color: "#12A454",
    },
    Category {
        key: "car",
        name: "Car",
        icon: "crosshair",
        color: "#E83F5B",
    },
    Category {
        key: "leisure",
        name: "Leisure",
        icon: "heart",
        color: "#26195C",
    },
    Category {
        key: "studies",
        name: "Studies",
        icon: "book",
        color: "#9C001A",
    },
];

impl Category {
    /// All categories in canonical order
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Look up a category by key (case-insensitive)
    pub fn find(key: &str) -> Option<&'static Category> {
        let key = key.trim();
        CATEGORIES.iter().find(|c| c.key.eq_ignore_ascii_case(key))
    }

    /// Look up a category by key or display name (case-insensitive)
    pub fn find_by_key_or_name(query: &str) -> Option<&'static Category> {
        let query = query.trim();
        Self::find(query).or_else(|| {
            CATEGORIES
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(query))
        })
    }

    /// Position in the canonical order
    pub fn index_of(key: &str) -> Option<usize> {
        CATEGORIES.iter().position(|c| c.key == key)
    }

    /// RGB components of the colour, for terminal rendering
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(self.color).unwrap_or((255, 255, 255))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Parse `#RRGGBB` into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
