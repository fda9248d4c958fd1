//! Date filter query parameters shared by the stats endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::analysis::DateRange;
use crate::error::AppError;
use crate::utils::dates::resolve_range;

/// `?date=YYYY-MM-DD` or `?from=YYYY-MM-DD&to=YYYY-MM-DD`.
///
/// Empty values, as submitted by a blank form field, count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DateFilterParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateFilterParams {
    /// Resolves the parameters into an inclusive [`DateRange`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `from` is after `to`.
    pub fn to_range(&self) -> Result<DateRange, AppError> {
        resolve_range(self.date, self.from, self.to)
    }
}
