use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::modules::project::application::{
    domain::entities::Project, ports::outgoing::ProjectQueryError,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB array of technology names
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_link: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub screenshot: String,

    pub featured: bool,

    pub display_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Project, ProjectQueryError> {
        let technologies = serde_json::from_value(self.technologies.clone()).map_err(|e| {
            ProjectQueryError::InvalidRow {
                id: self.id.to_string(),
                reason: format!("technologies: {}", e),
            }
        })?;

        Ok(Project {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            technologies,
            github_link: self.github_link.clone(),
            demo_link: self.demo_link.clone(),
            screenshot: self.screenshot.clone(),
            featured: self.featured,
            display_order: self.display_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

fn trim_optional(value: &ActiveValue<Option<String>>) -> Option<ActiveValue<Option<String>>> {
    match value {
        ActiveValue::Set(link) => Some(Set(link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string))),
        _ => None,
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        if let Some(link) = trim_optional(&self.github_link) {
            self.github_link = link;
        }

        if let Some(link) = trim_optional(&self.demo_link) {
            self.demo_link = link;
        }

        Ok(self)
    }
}
