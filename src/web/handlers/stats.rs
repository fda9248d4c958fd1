//! Statistics page: per-club table and dispersion chart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::filters::DateFilterParams;
use crate::domain::entities::CurrentUser;
use crate::state::AppState;
use crate::web::error::WebError;
use crate::web::views::{ChartView, StatsRowView, bucket_headings};

#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    from: String,
    to: String,
    headings: Vec<&'static str>,
    rows: Vec<StatsRowView>,
    total_shots: usize,
    chart: ChartView,
}

/// `GET /stats`
///
/// Accepts `?date=` for one day or `?from=&to=` for an inclusive range.
/// Every club is listed, including those without shots in range.
///
/// # Errors
///
/// 400 Bad Request for malformed dates or `from` after `to`.
pub async fn stats_page(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    params: Result<Query<DateFilterParams>, QueryRejection>,
) -> Result<StatsTemplate, WebError> {
    let Query(params) = params?;
    let range = params.to_range()?;

    let report = state.stats_service.report(user, range).await?;
    let fmt = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    Ok(StatsTemplate {
        from: fmt(report.range.from),
        to: fmt(report.range.to),
        headings: bucket_headings(),
        rows: report.rows.iter().map(StatsRowView::from).collect(),
        total_shots: report.total_shots(),
        chart: ChartView::from(&report.chart),
    })
}
