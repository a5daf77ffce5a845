//! `vendora-analytics` — scoped revenue attribution and dashboard read views.
//!
//! Everything here is a pure function of an already-fetched snapshot: the
//! engine performs no IO, holds no mutable state, and either returns a fully
//! computed view or an error (never a partial aggregate).

pub mod attribution;
pub mod calendar;
pub mod engine;
pub mod overview;
pub mod rollup;
pub mod trends;

pub use attribution::{BucketTotal, RevenueSummary, attribute, bucketed};
pub use calendar::{Bucket, Granularity, available_years, dashboard_buckets, trend_buckets};
pub use engine::EngineContext;
pub use overview::{OverviewRequest, OverviewStats};
pub use rollup::{DimensionTotal, rollup};
pub use trends::{TrendRequest, TrendStats};
