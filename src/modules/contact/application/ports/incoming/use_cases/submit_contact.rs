use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{Contact, InvalidField};

/// Raw form fields as received, before trimming or validation.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Invalid contact submission")]
    Invalid(Vec<InvalidField>),

    #[error("Failed to store contact: {0}")]
    RepositoryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: SubmitContactInput) -> Result<Contact, SubmitContactError>;
}
