//! Configuration handling for the form builder

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::upload::{MediaType, UploadPolicy, DEFAULT_MAX_UPLOAD_BYTES};

/// Fallback log filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "award_forms=info";

/// User configuration for the builder
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Award configuration file edited by the builder
    pub award_file: Option<PathBuf>,
    /// Persist every committed change immediately
    pub autosave: Option<bool>,
    /// Largest accepted supporting document, in bytes
    pub max_upload_bytes: Option<u64>,
    /// Media types accepted for supporting documents
    pub allowed_media_types: Option<Vec<MediaType>>,
    /// tracing filter directive
    pub log_filter: Option<String>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "edu-society", "award-forms")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Award file to edit, falling back to `award.json` in the data dir
    pub fn award_file(&self) -> PathBuf {
        self.award_file.clone().unwrap_or_else(|| {
            Self::project_dirs()
                .map(|dirs| dirs.data_dir().join("award.json"))
                .unwrap_or_else(|| PathBuf::from("award.json"))
        })
    }

    pub fn autosave(&self) -> bool {
        self.autosave.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Upload policy derived from the configured limits
    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::new(
            self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            self.allowed_media_types
                .clone()
                .unwrap_or_else(MediaType::document_defaults),
        )
    }
}
