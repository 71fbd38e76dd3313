use async_trait::async_trait;

use crate::modules::download::application::domain::entities::ResumeFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeStoreError {
    #[error("Resume file not found at {0}")]
    NotFound(String),

    #[error("Failed to read resume: {0}")]
    Io(String),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn load_resume(&self) -> Result<ResumeFile, ResumeStoreError>;
}
