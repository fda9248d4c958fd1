//! Form bodies submitted by the dashboard pages.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::ShotDraft;
use crate::domain::entities::NewClub;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirmation: String,
}

/// Add and edit club form. Blank optional inputs arrive as empty strings.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ClubForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Must provide club name"))]
    pub name: String,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(range(min = 0.0, max = 90.0, message = "Loft must be between 0 and 90 degrees"))]
    pub loft: Option<f64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ClubForm> for NewClub {
    fn from(form: ClubForm) -> Self {
        NewClub {
            name: form.name,
            category: form.category,
            loft: form.loft,
            notes: form.notes,
        }
    }
}

/// Log shot form. A blank date means today.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ShotForm {
    #[serde_as(as = "DisplayFromStr")]
    pub club_id: i64,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 0.0, message = "Distance must be a non-negative number"))]
    pub distance: f64,

    #[serde(default)]
    pub result: Option<String>,

    #[serde(default)]
    pub context: Option<String>,
}

impl From<ShotForm> for ShotDraft {
    fn from(form: ShotForm) -> Self {
        ShotDraft {
            club_id: form.club_id,
            date: form.date,
            distance: form.distance,
            result: form.result,
            context: form.context,
        }
    }
}
