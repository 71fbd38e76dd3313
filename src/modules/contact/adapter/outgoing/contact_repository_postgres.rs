use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::entities::{Contact, SubmitContactCommand},
    ports::outgoing::{ContactRepository, ContactRepositoryError},
};

use super::sea_orm_entity::ActiveModel as ContactActiveModel;

#[derive(Clone, Debug)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_contact(
        &self,
        command: &SubmitContactCommand,
    ) -> Result<Contact, ContactRepositoryError> {
        let active_contact = ContactActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(command.name().to_string()),
            email: Set(command.email().to_string()),
            subject: Set(command.subject().to_string()),
            message: Set(command.message().to_string()),
            created_at: NotSet,
        };

        let inserted = active_contact
            .insert(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}
