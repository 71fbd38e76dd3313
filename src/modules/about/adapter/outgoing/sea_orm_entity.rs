use sea_orm::entity::prelude::*;
use serde_json::Value as JsonValue;

use crate::modules::about::application::{
    domain::entities::About, ports::outgoing::AboutQueryError,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub tagline: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub education: JsonValue,

    #[sea_orm(column_type = "JsonBinary")]
    pub courses: JsonValue,

    #[sea_orm(column_type = "JsonBinary")]
    pub interests: JsonValue,

    #[sea_orm(column_type = "Text")]
    pub resume: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<About, AboutQueryError> {
        let id = self.id;
        fn decode_with<T: serde::de::DeserializeOwned>(
            id: Uuid,
            column: &str,
            value: &JsonValue,
        ) -> Result<T, AboutQueryError> {
            serde_json::from_value(value.clone()).map_err(|e| AboutQueryError::InvalidRow {
                id: id.to_string(),
                reason: format!("{}: {}", column, e),
            })
        }

        Ok(About {
            id: self.id,
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            bio: self.bio.clone(),
            profile_image: self.profile_image.clone(),
            education: decode_with(id, "education", &self.education)?,
            courses: decode_with(id, "courses", &self.courses)?,
            interests: decode_with(id, "interests", &self.interests)?,
            resume: self.resume.clone(),
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
        if let sea_orm::ActiveValue::Set(name) = &self.name {
            self.name = sea_orm::Set(name.trim().to_string());
        }

        Ok(self)
    }
}
