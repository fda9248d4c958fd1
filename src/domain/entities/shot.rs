//! Shot entity recorded against a club.

use chrono::NaiveDate;

/// A single practice shot.
///
/// Ownership follows the club: a shot belongs to whoever owns `club_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub id: i64,
    pub club_id: i64,
    pub date: NaiveDate,
    pub distance: f64,
    pub result: Option<String>,
    pub context: Option<String>,
}

impl Shot {
    /// Creates a new Shot instance.
    pub fn new(
        id: i64,
        club_id: i64,
        date: NaiveDate,
        distance: f64,
        result: Option<String>,
        context: Option<String>,
    ) -> Self {
        Self {
            id,
            club_id,
            date,
            distance,
            result,
            context,
        }
    }
}

/// Input data for logging a new shot.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShot {
    pub club_id: i64,
    pub date: NaiveDate,
    pub distance: f64,
    pub result: Option<String>,
    pub context: Option<String>,
}

/// A shot joined with the club it was hit with, for shot listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotWithClub {
    pub shot: Shot,
    pub club: crate::domain::entities::Club,
}
