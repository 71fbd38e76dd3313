use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::about::application::{
    domain::entities::About,
    ports::outgoing::{AboutQuery, AboutQueryError},
};

use super::sea_orm_entity::{Column as AboutColumn, Entity as AboutEntity};

#[derive(Debug, Clone)]
pub struct AboutQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutQuery for AboutQueryPostgres {
    async fn find_about(&self) -> Result<Option<About>, AboutQueryError> {
        // Singleton; if a reseed left more than one row, the oldest wins.
        let model = AboutEntity::find()
            .order_by_asc(AboutColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        model.map(|m| m.to_domain()).transpose()
    }
}
