//! Award configuration persistence

use std::path::PathBuf;

use async_trait::async_trait;

use crate::award::{AwardConfig, AwardError};

/// Trait abstraction for award persistence, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AwardRepository: Send + Sync {
    /// Load the stored award, `None` when nothing has been saved yet
    async fn load(&self) -> Result<Option<AwardConfig>, AwardError>;

    /// Persist the award, replacing any previous version
    async fn save(&self, award: &AwardConfig) -> Result<(), AwardError>;
}

/// Stores one award as a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the next version is written to before it replaces the award
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "award.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl AwardRepository for JsonFileRepository {
    async fn load(&self) -> Result<Option<AwardConfig>, AwardError> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::info!(path = %self.path.display(), "no award file yet");
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        let award: AwardConfig = serde_json::from_str(&content)?;
        tracing::info!(
            path = %self.path.display(),
            questions = award.questions.len(),
            "award loaded"
        );
        Ok(Some(award))
    }

    async fn save(&self, award: &AwardConfig) -> Result<(), AwardError> {
        award.validate()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(award)?;
        // The award file is only ever replaced whole, never truncated in place
        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        tracing::info!(
            path = %self.path.display(),
            questions = award.questions.len(),
            "award saved"
        );
        Ok(())
    }
}
