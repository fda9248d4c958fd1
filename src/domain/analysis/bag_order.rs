//! Golf-bag ordering of a user's clubs.
//!
//! Order is recomputed on every read from the club's category and loft:
//! driver, woods, hybrids, irons, wedges by ascending loft, putter, then
//! anything unrecognized.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::domain::entities::Club;

/// Club category used for bag ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubCategory {
    Driver,
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Putter,
    Unknown,
}

/// Name patterns checked in order against the lowercased club name.
///
/// Putter and wedge come first so "sand wedge" or "driving putter" never
/// fall into a longer-club category.
static NAME_PATTERNS: LazyLock<Vec<(Regex, ClubCategory)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"putter").unwrap(), ClubCategory::Putter),
        (
            Regex::new(r"wedge|^[pgasldu]w$").unwrap(),
            ClubCategory::Wedge,
        ),
        (Regex::new(r"driver").unwrap(), ClubCategory::Driver),
        (
            Regex::new(r"hybrid|rescue|^\d+\s*h$").unwrap(),
            ClubCategory::Hybrid,
        ),
        (Regex::new(r"wood|^\d+\s*w$").unwrap(), ClubCategory::Wood),
        (Regex::new(r"iron|^\d+\s*i$").unwrap(), ClubCategory::Iron),
    ]
});

impl ClubCategory {
    /// Primary bag-order rank.
    pub fn rank(self) -> u8 {
        match self {
            ClubCategory::Driver => 0,
            ClubCategory::Wood => 1,
            ClubCategory::Hybrid => 2,
            ClubCategory::Iron => 3,
            ClubCategory::Wedge => 4,
            ClubCategory::Putter => 5,
            ClubCategory::Unknown => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClubCategory::Driver => "driver",
            ClubCategory::Wood => "wood",
            ClubCategory::Hybrid => "hybrid",
            ClubCategory::Iron => "iron",
            ClubCategory::Wedge => "wedge",
            ClubCategory::Putter => "putter",
            ClubCategory::Unknown => "unknown",
        }
    }

    /// Parses a declared category. Unrecognized text is `Unknown`.
    pub fn parse(declared: &str) -> Self {
        match declared.trim().to_lowercase().as_str() {
            "driver" => ClubCategory::Driver,
            "wood" | "woods" | "fairway" | "fairway wood" => ClubCategory::Wood,
            "hybrid" | "hybrids" | "rescue" => ClubCategory::Hybrid,
            "iron" | "irons" => ClubCategory::Iron,
            "wedge" | "wedges" => ClubCategory::Wedge,
            "putter" => ClubCategory::Putter,
            _ => ClubCategory::Unknown,
        }
    }

    /// Derives a category from a free-text club name such as "7 iron" or "SW".
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        NAME_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.is_match(&name))
            .map(|(_, category)| *category)
            .unwrap_or(ClubCategory::Unknown)
    }

    /// Category of a club: the declared one when present, otherwise derived
    /// from its name.
    pub fn of(club: &Club) -> Self {
        match club.category.as_deref().map(str::trim) {
            Some(declared) if !declared.is_empty() => Self::parse(declared),
            _ => Self::infer_from_name(&club.name),
        }
    }
}

/// Sort key placing a club in golf-bag order.
///
/// Loft only participates for wedges; wedges without a loft sort after every
/// lofted wedge. Keys that compare equal keep their input order when used
/// with a stable sort such as [`sort_by_bag_order`].
#[derive(Debug, Clone, Copy)]
pub struct BagOrderKey {
    rank: u8,
    loft: Option<f64>,
}

impl BagOrderKey {
    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl Ord for BagOrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| match (self.loft, other.loft) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for BagOrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BagOrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BagOrderKey {}

/// Computes the bag-order key of a club.
pub fn order_key(club: &Club) -> BagOrderKey {
    let category = ClubCategory::of(club);
    let loft = match category {
        ClubCategory::Wedge => club.loft.filter(|l| l.is_finite()),
        _ => None,
    };

    BagOrderKey {
        rank: category.rank(),
        loft,
    }
}

/// Sorts clubs into bag order in place, keeping input order for ties.
pub fn sort_by_bag_order(clubs: &mut [Club]) {
    clubs.sort_by_key(order_key);
}
