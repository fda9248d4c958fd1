//! Club entity owned by a single user.

use crate::domain::analysis::ClubCategory;

/// A club in a user's bag.
///
/// `category` is the value the user declared, if any; [`Club::category`]
/// falls back to deriving it from the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub loft: Option<f64>,
    pub notes: Option<String>,
}

impl Club {
    /// Creates a new Club instance.
    pub fn new(
        id: i64,
        user_id: i64,
        name: impl Into<String>,
        category: Option<String>,
        loft: Option<f64>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            category,
            loft,
            notes,
        }
    }

    /// Effective category, declared or derived from the name.
    pub fn category(&self) -> ClubCategory {
        ClubCategory::of(self)
    }

    /// Display label: the name, followed by the notes when present.
    pub fn label(&self) -> String {
        match self.notes.as_deref().map(str::trim) {
            Some(notes) if !notes.is_empty() => format!("{} – {}", self.name, notes),
            _ => self.name.clone(),
        }
    }
}

/// Input data for creating or replacing a club.
///
/// The same shape is used for edits; every field is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClub {
    pub name: String,
    pub category: Option<String>,
    pub loft: Option<f64>,
    pub notes: Option<String>,
}
