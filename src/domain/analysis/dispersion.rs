//! Deterministic 2D layout of shots for the dispersion chart.
//!
//! Coordinates are percentages of the chart box: `x` runs left to right,
//! `y` runs from the tee (bottom, 5%) to the longest tick (top, 95%).

use serde::Serialize;
use std::collections::HashMap;

use super::error::AnalysisError;
use super::miss::{MissBucket, classify};
use crate::domain::entities::{Club, Shot};

/// Marker colors assigned to clubs by their position in the club list.
pub const PALETTE: [&str; 8] = [
    "#ef4444", // red
    "#3b82f6", // blue
    "#22c55e", // green
    "#f97316", // orange
    "#a855f7", // purple
    "#14b8a6", // teal
    "#eab308", // yellow
    "#6b7280", // gray
];

/// Distance between range ticks, also the smallest vertical scale.
pub const TICK_STEP: f64 = 50.0;

const MARGIN: f64 = 5.0;
const SPAN: f64 = 90.0;
const LANE_WIDTH: f64 = 10.0;

/// A single positioned shot marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub shot_id: i64,
    pub club_id: i64,
    pub bucket: MissBucket,
    /// Horizontal lane from -2 (left) to 2 (right).
    pub lane: i8,
    pub x: f64,
    pub y: f64,
    pub distance: f64,
    pub color: &'static str,
}

/// Horizontal distance marker on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeTick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub club_id: i64,
    pub label: String,
    pub color: &'static str,
}

/// Everything needed to draw the dispersion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispersionChart {
    pub scale_max: f64,
    pub points: Vec<PlotPoint>,
    pub ticks: Vec<RangeTick>,
    pub legend: Vec<LegendEntry>,
}

/// Lane of a bucket. Unclassified shots share the center lane; the bucket
/// stays on the [`PlotPoint`] so they can be drawn differently.
pub fn lane(bucket: MissBucket) -> i8 {
    match bucket {
        MissBucket::Left => -2,
        MissBucket::CenterLeft => -1,
        MissBucket::Center | MissBucket::Other => 0,
        MissBucket::CenterRight => 1,
        MissBucket::Right => 2,
    }
}

/// Top of the vertical scale: the longest shot rounded up to the next
/// [`TICK_STEP`], never less than one step.
pub fn scale_max(shots: &[Shot]) -> f64 {
    let longest = shots
        .iter()
        .map(|s| s.distance)
        .filter(|d| d.is_finite())
        .fold(0.0_f64, f64::max);

    if longest <= 0.0 {
        TICK_STEP
    } else {
        (longest / TICK_STEP).ceil() * TICK_STEP
    }
}

fn vertical(distance: f64, scale_max: f64) -> f64 {
    let norm = (distance.max(0.0) / scale_max).min(1.0);
    MARGIN + norm * SPAN
}

fn color_index(clubs: &[Club]) -> HashMap<i64, &'static str> {
    let mut colors = HashMap::with_capacity(clubs.len());
    for (idx, club) in clubs.iter().enumerate() {
        colors
            .entry(club.id)
            .or_insert(PALETTE[idx % PALETTE.len()]);
    }
    colors
}

/// Lays out one [`PlotPoint`] per shot, in input order.
///
/// Colors follow each club's position in `clubs`, so passing clubs in bag
/// order keeps colors stable between calls.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] if a shot references a club that
/// is not in `clubs`.
pub fn layout(clubs: &[Club], shots: &[Shot]) -> Result<Vec<PlotPoint>, AnalysisError> {
    let colors = color_index(clubs);
    let scale = scale_max(shots);

    shots
        .iter()
        .map(|shot| {
            let color = *colors
                .get(&shot.club_id)
                .ok_or(AnalysisError::InvalidInput {
                    shot_id: shot.id,
                    club_id: shot.club_id,
                })?;

            let bucket = classify(shot.result.as_deref().unwrap_or(""));
            let lane = lane(bucket);

            Ok(PlotPoint {
                shot_id: shot.id,
                club_id: shot.club_id,
                bucket,
                lane,
                x: 50.0 + f64::from(lane) * LANE_WIDTH,
                y: vertical(shot.distance, scale),
                distance: shot.distance,
                color,
            })
        })
        .collect()
}

/// Builds the full chart: points, range ticks and a legend of the clubs
/// that have at least one point.
///
/// # Errors
///
/// See [`layout`].
pub fn chart(clubs: &[Club], shots: &[Shot]) -> Result<DispersionChart, AnalysisError> {
    let points = layout(clubs, shots)?;
    let scale = scale_max(shots);

    let ticks = (1..)
        .map(|i| f64::from(i) * TICK_STEP)
        .take_while(|value| *value <= scale)
        .map(|value| RangeTick {
            value,
            y: vertical(value, scale),
        })
        .collect();

    let colors = color_index(clubs);
    let legend = clubs
        .iter()
        .filter(|club| points.iter().any(|p| p.club_id == club.id))
        .map(|club| LegendEntry {
            club_id: club.id,
            label: club.label(),
            color: colors.get(&club.id).copied().unwrap_or(PALETTE[7]),
        })
        .collect();

    Ok(DispersionChart {
        scale_max: scale,
        points,
        ticks,
        legend,
    })
}
