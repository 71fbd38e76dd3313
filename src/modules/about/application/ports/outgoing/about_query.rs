use async_trait::async_trait;

use crate::modules::about::application::domain::entities::About;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid about row {id}: {reason}")]
    InvalidRow { id: String, reason: String },
}

#[async_trait]
pub trait AboutQuery: Send + Sync {
    /// Returns the single about document, if one has been seeded.
    async fn find_about(&self) -> Result<Option<About>, AboutQueryError>;
}
