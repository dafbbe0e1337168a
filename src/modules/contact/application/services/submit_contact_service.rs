use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::domain::{
    ContactMessage, ContactMessageCreate, ContactReceipt, SUBMITTED_MESSAGE,
};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{Stored, Validate};

pub struct SubmitContactService<R>
where
    R: ContentRepository<ContactMessage>,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContentRepository<ContactMessage>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContentRepository<ContactMessage>,
{
    async fn execute(&self, input: ContactMessageCreate) -> Result<ContactReceipt, ContentError> {
        input.validate()?;

        let stored = self
            .repository
            .insert(Stored::new(input.into_message(), timestamp_now()))
            .await?;

        info!("Contact message {} received", stored.id);
        Ok(ContactReceipt {
            id: stored.id.to_hex(),
            message: SUBMITTED_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::domain::MessageStatus;
    use crate::tests::support::memory_store::MemoryStore;

    fn submission(email: &str) -> ContactMessageCreate {
        ContactMessageCreate {
            name: "Visitor".to_string(),
            email: email.to_string(),
            subject: "Collaboration".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_message_as_new_and_returns_receipt() {
        let store = MemoryStore::new();
        let service = SubmitContactService::new(store.repo::<ContactMessage>());

        let receipt = service.execute(submission("v@example.com")).await.unwrap();

        assert_eq!(receipt.message, SUBMITTED_MESSAGE);
        let docs = store.documents("contact_messages");
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get_object_id("_id").unwrap().to_hex(), receipt.id);

        let stored = Stored::<ContactMessage>::from_document(docs[0].clone()).unwrap();
        assert_eq!(stored.content.status, MessageStatus::New);
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[tokio::test]
    async fn invalid_email_writes_nothing() {
        let store = MemoryStore::new();
        let service = SubmitContactService::new(store.repo::<ContactMessage>());

        let result = service.execute(submission("nope")).await;

        assert!(matches!(result, Err(ContentError::Validation(_))));
        assert_eq!(store.count_in("contact_messages"), 0);
    }
}
