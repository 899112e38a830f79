//! CLI commands for the promotion analytics.

pub mod daily;
pub mod lift;
pub mod operations;
pub mod output;
pub mod promo;
pub mod report;
pub mod roi;
pub mod trends;

pub use daily::{run_daily, DailyArgs};
pub use lift::{run_lift, LiftArgs};
pub use operations::{run_operations, OperationsArgs};
pub use output::OutputArgs;
pub use promo::{run_promo, PromoArgs};
pub use report::{run_report, ReportArgs};
pub use roi::{run_roi, RoiArgs};
pub use trends::{run_trends, TrendsArgs};
