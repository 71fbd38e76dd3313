use async_trait::async_trait;

use crate::modules::about::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAboutError {
    #[error("About information not found")]
    NotFound,

    #[error("Failed to fetch about information: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<About, GetAboutError>;
}
