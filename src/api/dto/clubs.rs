//! DTOs for the club list.

use serde::Serialize;

use crate::domain::entities::Club;

/// A club as returned by `GET /api/clubs`.
#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub id: i64,
    pub name: String,
    /// Effective category, declared or derived from the name.
    pub category: &'static str,
    /// Category as entered by the user, if any.
    pub declared_category: Option<String>,
    pub loft: Option<f64>,
    pub notes: Option<String>,
    pub label: String,
    /// Zero-based position in bag order.
    pub position: usize,
}

impl ClubResponse {
    pub fn from_club(club: Club, position: usize) -> Self {
        Self {
            category: club.category().as_str(),
            label: club.label(),
            id: club.id,
            name: club.name,
            declared_category: club.category,
            loft: club.loft,
            notes: club.notes,
            position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClubListResponse {
    pub total: usize,
    pub items: Vec<ClubResponse>,
}
