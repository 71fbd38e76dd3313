use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::skill::application::{
    domain::entities::{Skill, SkillCategory, SkillLevel},
    ports::outgoing::SkillQueryError,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    // frontend | backend | database | tools | soft-skills
    #[sea_orm(column_type = "Text")]
    pub category: String,

    pub level: i16,

    #[sea_orm(column_type = "Text")]
    pub icon: String,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Skill, SkillQueryError> {
        let invalid = |reason: String| SkillQueryError::InvalidRow {
            id: self.id.to_string(),
            reason,
        };

        let category = self
            .category
            .parse::<SkillCategory>()
            .map_err(|e| invalid(e.to_string()))?;
        let level = SkillLevel::new(self.level.into()).map_err(|e| invalid(e.to_string()))?;

        Ok(Skill {
            id: self.id,
            name: self.name.clone(),
            category,
            level,
            icon: self.icon.clone(),
            display_order: self.display_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}
