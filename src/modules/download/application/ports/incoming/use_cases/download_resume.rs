use async_trait::async_trait;

use crate::modules::download::application::domain::entities::ResumeFile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Failed to read resume: {0}")]
    ReadFailed(String),
}

#[async_trait]
pub trait DownloadResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeFile, DownloadResumeError>;
}
