use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::UpdateMessageStatusUseCase;
use crate::modules::contact::domain::{ContactMessage, MessageStatusUpdate};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::services::parse_object_id;
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{FieldPatch, Record};

pub struct UpdateMessageStatusService<R>
where
    R: ContentRepository<ContactMessage>,
{
    repository: R,
}

impl<R> UpdateMessageStatusService<R>
where
    R: ContentRepository<ContactMessage>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateMessageStatusUseCase for UpdateMessageStatusService<R>
where
    R: ContentRepository<ContactMessage>,
{
    async fn execute(
        &self,
        id: &str,
        update: MessageStatusUpdate,
    ) -> Result<Record<ContactMessage>, ContentError> {
        let id = parse_object_id(id)?;

        // Replace, not merge: the whole update shape is written.
        let patch = FieldPatch::replace(&update, timestamp_now())?;

        self.repository
            .apply_patch(id, patch)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    use crate::modules::contact::domain::MessageStatus;
    use crate::tests::support::content_fixtures::backdated;
    use crate::tests::support::memory_store::MemoryStore;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Visitor".to_string(),
            email: "v@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
            status: MessageStatus::New,
        }
    }

    #[tokio::test]
    async fn marks_message_as_read() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(message(), 15));
        let service = UpdateMessageStatusService::new(store.repo::<ContactMessage>());

        let record = service
            .execute(
                &stored.id.to_hex(),
                MessageStatusUpdate {
                    status: MessageStatus::Read,
                },
            )
            .await
            .unwrap();

        assert_eq!(record.content.status, MessageStatus::Read);
        assert_eq!(record.content.message, "Hello there");
        assert!(record.updated_at > stored.updated_at);
    }

    #[tokio::test]
    async fn unknown_message_is_not_found() {
        let store = MemoryStore::new();
        let service = UpdateMessageStatusService::new(store.repo::<ContactMessage>());

        let result = service
            .execute(
                &ObjectId::new().to_hex(),
                MessageStatusUpdate {
                    status: MessageStatus::Replied,
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), ContentError::NotFound);
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let store = MemoryStore::new();
        let service = UpdateMessageStatusService::new(store.repo::<ContactMessage>());

        let result = service
            .execute(
                "xyz",
                MessageStatusUpdate {
                    status: MessageStatus::Read,
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), ContentError::InvalidId("xyz".to_string()));
    }
}
