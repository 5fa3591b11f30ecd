//! Benchmark and scoring-rule loading
//!
//! The crate ships a benchmark table compiled in via rust-embed; a
//! workspace copy (created by `init`) takes precedence so teams can
//! maintain their own rates. Scoring rules default to the built-in
//! weights unless the workspace provides an override.

use rust_embed::Embed;
use thiserror::Error;

use crate::core::Workspace;
use crate::estimator::benchmark::BenchmarkTable;
use crate::estimator::readiness::ScoringRules;

/// Data files embedded at compile time
#[derive(Embed)]
#[folder = "assets/"]
struct EmbeddedAssets;

const BENCHMARKS_ASSET: &str = "benchmarks.yaml";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("embedded asset {0} is missing")]
    MissingAsset(&'static str),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

/// The raw YAML text of the built-in benchmark table, used to seed new
/// workspaces.
pub fn builtin_benchmarks_yaml() -> Result<String, LoadError> {
    let file =
        EmbeddedAssets::get(BENCHMARKS_ASSET).ok_or(LoadError::MissingAsset(BENCHMARKS_ASSET))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

/// The built-in benchmark table
pub fn builtin_benchmarks() -> Result<BenchmarkTable, LoadError> {
    let yaml = builtin_benchmarks_yaml()?;
    serde_yml::from_str(&yaml).map_err(|e| LoadError::Parse {
        path: BENCHMARKS_ASSET.to_string(),
        source: e,
    })
}

/// Load the benchmark table, preferring the workspace copy when one
/// exists. Outside a workspace the built-in table is used.
pub fn load_benchmarks(workspace: Option<&Workspace>) -> Result<BenchmarkTable, LoadError> {
    if let Some(ws) = workspace {
        let path = ws.benchmarks_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| LoadError::Read {
                path: path.display().to_string(),
                source: e,
            })?;
            return serde_yml::from_str(&contents).map_err(|e| LoadError::Parse {
                path: path.display().to_string(),
                source: e,
            });
        }
    }
    builtin_benchmarks()
}

/// Load scoring rules, preferring a workspace `scoring.yaml` override.
pub fn load_scoring_rules(workspace: Option<&Workspace>) -> Result<ScoringRules, LoadError> {
    if let Some(ws) = workspace {
        let path = ws.scoring_rules_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| LoadError::Read {
                path: path.display().to_string(),
                source: e,
            })?;
            return serde_yml::from_str(&contents).map_err(|e| LoadError::Parse {
                path: path.display().to_string(),
                source: e,
            });
        }
    }
    Ok(ScoringRules::default())
}
