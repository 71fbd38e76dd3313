use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::outgoing::{ProjectQuery, ProjectQueryError},
};

use super::sea_orm_entity::{Column as ProjectColumn, Entity as ProjectEntity};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn display_order_select() -> Select<ProjectEntity> {
    ProjectEntity::find()
        .order_by_asc(ProjectColumn::DisplayOrder)
        .order_by_desc(ProjectColumn::CreatedAt)
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let models = display_order_select()
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        models.iter().map(|m| m.to_domain()).collect()
    }

    async fn find_by_id(&self, project_id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        let model = ProjectEntity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        model.map(|m| m.to_domain()).transpose()
    }
}
