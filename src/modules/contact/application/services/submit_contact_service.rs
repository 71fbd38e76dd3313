use async_trait::async_trait;

use crate::modules::contact::application::{
    domain::entities::{Contact, SubmitContactCommand},
    ports::{
        incoming::use_cases::{SubmitContactError, SubmitContactInput, SubmitContactUseCase},
        outgoing::ContactRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, input: SubmitContactInput) -> Result<Contact, SubmitContactError> {
        let command =
            SubmitContactCommand::new(&input.name, &input.email, &input.subject, &input.message)
                .map_err(|e| SubmitContactError::Invalid(e.0))?;

        self.repository
            .create_contact(&command)
            .await
            .map_err(|e| SubmitContactError::RepositoryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::contact::application::ports::outgoing::ContactRepositoryError;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct RecordingRepository {
        saved: Arc<Mutex<Vec<SubmitContactCommand>>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl ContactRepository for RecordingRepository {
        async fn create_contact(
            &self,
            command: &SubmitContactCommand,
        ) -> Result<Contact, ContactRepositoryError> {
            if let Some(msg) = &self.fail_with {
                return Err(ContactRepositoryError::DatabaseError(msg.clone()));
            }

            self.saved.lock().unwrap().push(command.clone());

            Ok(Contact {
                id: Uuid::new_v4(),
                name: command.name().to_string(),
                email: command.email().to_string(),
                subject: command.subject().to_string(),
                message: command.message().to_string(),
                created_at: Utc::now(),
            })
        }
    }

    fn input(name: &str, email: &str, subject: &str, message: &str) -> SubmitContactInput {
        SubmitContactInput {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn valid_submission_is_persisted_trimmed() {
        // Arrange
        let repo = RecordingRepository::default();
        let service = SubmitContactService::new(repo.clone());

        // Act
        let contact = service
            .execute(input(" Ada ", "ada@example.com ", "Hi", " Hello there "))
            .await
            .unwrap();

        // Assert
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.message, "Hello there");

        let saved = repo.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].email(), "ada@example.com");
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_repository() {
        let repo = RecordingRepository::default();
        let service = SubmitContactService::new(repo.clone());

        let result = service.execute(input("", "nope", "Hi", "")).await;

        match result {
            Err(SubmitContactError::Invalid(fields)) => {
                let names: Vec<_> = fields.iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["name", "email", "message"]);
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }

        assert!(repo.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_failure_is_mapped() {
        let service = SubmitContactService::new(RecordingRepository {
            fail_with: Some("disk full".to_string()),
            ..Default::default()
        });

        let result = service
            .execute(input("Ada", "ada@example.com", "Hi", "Hello"))
            .await;

        match result {
            Err(SubmitContactError::RepositoryFailed(msg)) => assert!(msg.contains("disk full")),
            other => panic!("Expected RepositoryFailed, got {:?}", other),
        }
    }
}
