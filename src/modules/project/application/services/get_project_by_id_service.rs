use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{GetProjectByIdError, GetProjectByIdUseCase},
        outgoing::ProjectQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectByIdUseCase for GetProjectByIdService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<Project, GetProjectByIdError> {
        self.query
            .find_by_id(project_id)
            .await
            .map_err(|e| GetProjectByIdError::QueryFailed(e.to_string()))?
            .ok_or(GetProjectByIdError::NotFound)
    }
}
