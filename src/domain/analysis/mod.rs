//! Club ordering and shot analysis.
//!
//! Pure, synchronous functions over one user's clubs and shots. Callers pass
//! the already scoped collections in; nothing here touches storage or
//! request state.
//!
//! - [`miss`] - free-text result to [`MissBucket`]
//! - [`bag_order`] - golf-bag sort key for clubs
//! - [`stats`] - per-club counts, averages and miss distribution
//! - [`dispersion`] - chart coordinates for every shot

pub mod bag_order;
pub mod dispersion;
pub mod error;
pub mod miss;
pub mod stats;

pub use bag_order::{BagOrderKey, ClubCategory, order_key, sort_by_bag_order};
pub use dispersion::{DispersionChart, LegendEntry, PlotPoint, RangeTick, chart, layout};
pub use error::AnalysisError;
pub use miss::{MissBucket, classify};
pub use stats::{ClubStats, DateRange, aggregate};
