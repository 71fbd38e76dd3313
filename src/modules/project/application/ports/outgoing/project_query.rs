use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid project row {id}: {reason}")]
    InvalidRow { id: String, reason: String },
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// All projects, in display order.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn find_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError>;
}
