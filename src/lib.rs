//! RiscLens: deterministic compliance estimation toolkit
//!
//! Rules-based readiness scoring, vendor risk assessment, and cost
//! estimation over a plain-text benchmark table. Every output can be
//! traced to explicit weights and market-rate rows; nothing is
//! probabilistic.

pub mod cli;
pub mod core;
pub mod estimator;
