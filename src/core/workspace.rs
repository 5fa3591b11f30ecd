//! Workspace discovery and structure

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A risclens workspace: a directory containing `.risclens/` with the
/// benchmark table and optional overrides.
#[derive(Debug)]
pub struct Workspace {
    /// Root directory (parent of .risclens/)
    root: PathBuf,
}

impl Workspace {
    /// Find the workspace root by walking up from the current directory
    pub fn discover() -> Result<Self, WorkspaceError> {
        let current =
            std::env::current_dir().map_err(|e| WorkspaceError::Io(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, WorkspaceError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;

        loop {
            if current.join(".risclens").is_dir() {
                return Ok(Self { root: current });
            }

            if !current.pop() {
                return Err(WorkspaceError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new workspace at the given path, seeding the benchmark
    /// table and a commented config.
    pub fn init(path: &Path, benchmarks_yaml: &str) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let dir = root.join(".risclens");
        if dir.exists() {
            return Err(WorkspaceError::AlreadyExists(root.clone()));
        }

        Self::scaffold(&root, benchmarks_yaml)?;
        Ok(Self { root })
    }

    /// Re-initialize even if `.risclens/` exists, overwriting the seeded
    /// benchmark table and config.
    pub fn init_force(path: &Path, benchmarks_yaml: &str) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::scaffold(&root, benchmarks_yaml)?;
        Ok(Self { root })
    }

    fn scaffold(root: &Path, benchmarks_yaml: &str) -> Result<(), WorkspaceError> {
        let dir = root.join(".risclens");
        std::fs::create_dir_all(dir.join("assessments"))
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;
        std::fs::write(dir.join("benchmarks.yaml"), benchmarks_yaml)
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;
        std::fs::write(dir.join("config.yaml"), Self::default_config())
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;
        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# risclens workspace configuration

# Name recorded on generated reports (can be overridden by global config)
# analyst: ""

# Default output format (auto, yaml, json)
# default_format: auto
"#
    }

    /// Workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The .risclens configuration directory
    pub fn risclens_dir(&self) -> PathBuf {
        self.root.join(".risclens")
    }

    /// Path of the workspace benchmark table
    pub fn benchmarks_path(&self) -> PathBuf {
        self.risclens_dir().join("benchmarks.yaml")
    }

    /// Path of the optional scoring rules override
    pub fn scoring_rules_path(&self) -> PathBuf {
        self.risclens_dir().join("scoring.yaml")
    }

    /// Directory where saved assessments are written
    pub fn assessments_dir(&self) -> PathBuf {
        self.risclens_dir().join("assessments")
    }
}

/// Errors that can occur during workspace operations
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("not a risclens workspace (searched from {searched_from:?}). Run 'risclens init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("risclens workspace already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(String),
}
