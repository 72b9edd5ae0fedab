//! Named patterns and numeric limits for fieldcheck rules.
//!
//! Rules never hard-code their regular expressions or quotas; they read
//! them from a [`Constants`] value built once at startup. The built-in
//! defaults can be layered over with a JSON/TOML file, a `.env` file and
//! `FIELDCHECK_*` environment variables.
//!
//! ```
//! use fieldcheck_config::Constants;
//!
//! let constants = Constants::builder().build().unwrap();
//! assert!(constants.patterns.mobile.is_match("13800138000"));
//! assert_eq!(constants.limits.room.max_count, 50);
//! ```

pub mod env;
pub mod error;
pub mod limits;
pub mod loader;
pub mod patterns;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use limits::{Bounds, CooperationUserLimits, Limits, RoomLimits};
pub use loader::{ConfigLoader, ConstantsFile, FileFormat};
pub use patterns::{PatternSource, Patterns};

use std::path::PathBuf;

/// Everything a rule may depend on by name.
#[derive(Debug, Clone, Default)]
pub struct Constants {
    pub patterns: Patterns,
    pub limits: Limits,
}

impl Constants {
    pub fn builder() -> ConstantsBuilder {
        ConstantsBuilder::new()
    }

    /// Compile and check a parsed constants file.
    pub fn from_file(file: ConstantsFile) -> Result<Self> {
        file.limits.validate()?;
        Ok(Self {
            patterns: Patterns::compile(&file.patterns)?,
            limits: file.limits,
        })
    }
}

/// Layers defaults, files, `.env` and the environment, in that order.
pub struct ConstantsBuilder {
    prefix: String,
    load_env: bool,
    load_dotenv: bool,
    dotenv_path: Option<PathBuf>,
    files: Vec<PathBuf>,
}

impl ConstantsBuilder {
    pub fn new() -> Self {
        Self {
            prefix: env::DEFAULT_PREFIX.to_string(),
            load_env: false,
            load_dotenv: false,
            dotenv_path: None,
            files: Vec::new(),
        }
    }

    /// Set environment variable prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable overrides from environment variables
    pub fn load_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    /// Enable loading a .env file before reading the environment
    pub fn load_dotenv(mut self, path: Option<PathBuf>) -> Self {
        self.load_dotenv = true;
        self.load_env = true;
        self.dotenv_path = path;
        self
    }

    /// Add a constants file; later files win
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn build(self) -> Result<Constants> {
        let mut merged = serde_json::Value::Object(Default::default());

        for path in &self.files {
            let loaded = ConfigLoader::auto(path)?.load_value(path)?;
            tracing::debug!(path = %path.display(), "Loaded constants file");
            loader::merge_values(&mut merged, loaded);
        }
        let mut file = loader::typed(merged)?;

        if self.load_dotenv {
            let loaded = match &self.dotenv_path {
                Some(path) => dotenvy::from_path(path)
                    .map_err(|e| ConfigError::LoadError(e.to_string()))
                    .map(|_| true)?,
                None => dotenvy::dotenv().is_ok(),
            };
            tracing::debug!(loaded, ".env lookup finished");
        }

        if self.load_env {
            EnvLoader::new(self.prefix).apply(&mut file.patterns, &mut file.limits)?;
        }

        Constants::from_file(file)
    }
}

impl Default for ConstantsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
