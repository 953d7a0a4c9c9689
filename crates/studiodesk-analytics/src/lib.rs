//! Dashboard aggregates over the ticket table
//!
//! Everything is computed in memory from one unfiltered read.

pub mod aggregate;
pub mod query;

pub use aggregate::{
    aggregate_at, compute_analytics, AnalyticsAggregate, CategoryCount, DailyCount,
    PriorityResolution, StudioCount, Summary, TeamCount, TOP_CATEGORY_COUNT, TREND_DAYS,
};
pub use query::{AnalyticsError, AnalyticsQuery, StudioFilter, TimeRange};
