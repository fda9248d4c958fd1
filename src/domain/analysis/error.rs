//! Errors raised by the analysis functions.

use thiserror::Error;

/// Input the caller should never have passed.
///
/// Everything else in the analysis module is total; this only fires when
/// the shot and club collections handed in are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("shot {shot_id} references club {club_id}, which is not in the supplied club set")]
    InvalidInput { shot_id: i64, club_id: i64 },
}
