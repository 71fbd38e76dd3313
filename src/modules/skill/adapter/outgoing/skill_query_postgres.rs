use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::skill::application::{
    domain::entities::Skill,
    ports::outgoing::{SkillQuery, SkillQueryError},
};

use super::sea_orm_entity::{Column as SkillColumn, Entity as SkillEntity};

#[derive(Debug, Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn display_order_select() -> Select<SkillEntity> {
    SkillEntity::find()
        .order_by_asc(SkillColumn::DisplayOrder)
        .order_by_asc(SkillColumn::Name)
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_skills(&self) -> Result<Vec<Skill>, SkillQueryError> {
        let models = display_order_select()
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        models.iter().map(|m| m.to_domain()).collect()
    }
}
