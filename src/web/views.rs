//! Display-ready rows for the dashboard templates.
//!
//! Numbers are formatted here so templates only print strings.

use crate::application::services::ClubStatsRow;
use crate::domain::analysis::{
    ClubCategory, DispersionChart, LegendEntry, MissBucket, PlotPoint, RangeTick,
};
use crate::domain::entities::{Club, ShotWithClub};

fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// A club row on the clubs page.
pub struct ClubView {
    pub id: i64,
    pub position: usize,
    pub name: String,
    pub category: &'static str,
    pub loft: String,
    pub notes: String,
}

impl ClubView {
    /// `position` is the zero-based bag position.
    pub fn new(club: &Club, position: usize) -> Self {
        Self {
            id: club.id,
            position: position + 1,
            name: club.name.clone(),
            category: club.category().as_str(),
            loft: club.loft.map(|l| format!("{}°", l)).unwrap_or_default(),
            notes: club.notes.clone().unwrap_or_default(),
        }
    }
}

pub fn club_views(clubs: &[Club]) -> Vec<ClubView> {
    clubs
        .iter()
        .enumerate()
        .map(|(idx, club)| ClubView::new(club, idx))
        .collect()
}

/// One `<option>` of the category select.
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

const CATEGORIES: [ClubCategory; 6] = [
    ClubCategory::Driver,
    ClubCategory::Wood,
    ClubCategory::Hybrid,
    ClubCategory::Iron,
    ClubCategory::Wedge,
    ClubCategory::Putter,
];

/// Category choices with `current` preselected. The empty value lets the
/// category be inferred from the club name.
pub fn category_options(current: Option<&str>) -> Vec<CategoryOption> {
    let current = current.map(ClubCategory::parse);

    let mut options = vec![CategoryOption {
        value: "",
        label: "From name",
        selected: current.is_none() || current == Some(ClubCategory::Unknown),
    }];

    options.extend(CATEGORIES.iter().map(|category| CategoryOption {
        value: category.as_str(),
        label: category.as_str(),
        selected: current == Some(*category),
    }));

    options
}

/// Values prefilled into the edit club form.
pub struct ClubFormView {
    pub id: i64,
    pub name: String,
    pub loft: String,
    pub notes: String,
    pub categories: Vec<CategoryOption>,
}

impl From<&Club> for ClubFormView {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            loft: club.loft.map(|l| l.to_string()).unwrap_or_default(),
            notes: club.notes.clone().unwrap_or_default(),
            categories: category_options(club.category.as_deref()),
        }
    }
}

/// One `<option>` of the club select on the shots page.
pub struct ClubOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

/// Clubs in bag order; the first one is preselected.
pub fn club_options(clubs: &[Club]) -> Vec<ClubOption> {
    clubs
        .iter()
        .enumerate()
        .map(|(idx, club)| ClubOption {
            id: club.id,
            label: club.label(),
            selected: idx == 0,
        })
        .collect()
}

pub struct ShotView {
    pub id: i64,
    pub date: String,
    pub club: String,
    pub distance: String,
    pub result: String,
    pub context: String,
}

impl From<&ShotWithClub> for ShotView {
    fn from(row: &ShotWithClub) -> Self {
        Self {
            id: row.shot.id,
            date: row.shot.date.format("%Y-%m-%d").to_string(),
            club: row.club.name.clone(),
            distance: one_decimal(row.shot.distance),
            result: row.shot.result.clone().unwrap_or_default(),
            context: row.shot.context.clone().unwrap_or_default(),
        }
    }
}

/// A row of the stats table.
pub struct StatsRowView {
    pub name: String,
    pub shot_count: usize,
    /// Average rounded to one decimal, `-` without shots.
    pub average: String,
    /// Bucket percentages in [`MissBucket::ALL`] order.
    pub percents: Vec<String>,
}

impl From<&ClubStatsRow> for StatsRowView {
    fn from(row: &ClubStatsRow) -> Self {
        Self {
            name: row.club.label(),
            shot_count: row.stats.shot_count,
            average: row
                .stats
                .average_distance
                .map(one_decimal)
                .unwrap_or_else(|| "-".to_string()),
            percents: MissBucket::ALL
                .iter()
                .map(|b| format!("{}%", one_decimal(row.stats.bucket_percent(*b))))
                .collect(),
        }
    }
}

/// Column headings matching [`StatsRowView::percents`].
pub fn bucket_headings() -> Vec<&'static str> {
    MissBucket::ALL.iter().map(|b| b.title()).collect()
}

/// A marker in SVG coordinates, where `y` grows downwards.
pub struct PointView {
    pub cx: f64,
    pub cy: f64,
    pub color: &'static str,
    /// Unclassified shots are drawn hollow.
    pub hollow: bool,
    pub title: String,
}

impl From<&PlotPoint> for PointView {
    fn from(point: &PlotPoint) -> Self {
        Self {
            cx: point.x,
            cy: 100.0 - point.y,
            color: point.color,
            hollow: point.bucket == MissBucket::Other,
            title: format!("{} ({})", one_decimal(point.distance), point.bucket.as_str()),
        }
    }
}

pub struct TickView {
    pub y: f64,
    pub label: String,
}

impl From<&RangeTick> for TickView {
    fn from(tick: &RangeTick) -> Self {
        Self {
            y: 100.0 - tick.y,
            label: format!("{}", tick.value),
        }
    }
}

pub struct LegendView {
    pub label: String,
    pub color: &'static str,
}

impl From<&LegendEntry> for LegendView {
    fn from(entry: &LegendEntry) -> Self {
        Self {
            label: entry.label.clone(),
            color: entry.color,
        }
    }
}

/// The dispersion chart in template form.
pub struct ChartView {
    pub points: Vec<PointView>,
    pub ticks: Vec<TickView>,
    pub legend: Vec<LegendView>,
}

impl From<&DispersionChart> for ChartView {
    fn from(chart: &DispersionChart) -> Self {
        Self {
            points: chart.points.iter().map(PointView::from).collect(),
            ticks: chart.ticks.iter().map(TickView::from).collect(),
            legend: chart.legend.iter().map(LegendView::from).collect(),
        }
    }
}
