use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{Contact, SubmitContactCommand};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(
        &self,
        command: &SubmitContactCommand,
    ) -> Result<Contact, ContactRepositoryError>;
}
