//! Performance ranking

pub mod aggregator;
pub mod service;

pub use aggregator::{completed_task_counts, rank_top_performers};
pub use service::PerformanceService;
