use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectByIdError {
    #[error("Project not found")]
    NotFound,

    #[error("Failed to fetch project: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectByIdUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectByIdError>;
}
