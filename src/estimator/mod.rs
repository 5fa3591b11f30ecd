//! Estimator module - deterministic, rules-based scoring and cost estimation
//!
//! Every function in this module is a total, pure function of its inputs.
//! Missing benchmark data degrades to zero-valued contributions rather
//! than failing.

pub mod benchmark;
pub mod gap;
pub mod readiness;
pub mod recommend;
pub mod roi;
pub mod timeline;
pub mod vendor;

pub use benchmark::{BenchmarkEntry, BenchmarkTable, CostRange};
pub use gap::{calculate_gap, GapInput, GapResult};
pub use readiness::{calculate_readiness, ReadinessInput, ReadinessReport, ScoringRules};
pub use recommend::{select_recommendations, Recommendation, RecommendationInput};
pub use roi::{compare_approaches, Approach, RoiInput, RoiResult};
pub use timeline::{estimate_timeline, TimelineInput, TimelineResult};
pub use vendor::{assess_vendor, VendorRiskInput, VendorRiskResult};
