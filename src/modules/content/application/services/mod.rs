mod create_content_service;
mod delete_content_service;
mod get_content_service;
mod list_content_service;
mod singleton_service;
mod update_content_service;

pub use create_content_service::CreateContentService;
pub use delete_content_service::DeleteContentService;
pub use get_content_service::GetContentService;
pub use list_content_service::ListContentService;
pub use singleton_service::{EnsureSingletonService, GetSingletonService, UpdateSingletonService};
pub use update_content_service::UpdateContentService;

use mongodb::bson::oid::ObjectId;

use crate::modules::content::application::ports::incoming::use_cases::ContentError;

/// Rejects malformed identifiers before anything touches the store.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ContentError> {
    ObjectId::parse_str(raw).map_err(|_| ContentError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_hex_id_parses() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn malformed_id_is_invalid() {
        assert_eq!(
            parse_object_id("not-an-id"),
            Err(ContentError::InvalidId("not-an-id".to_string()))
        );
        assert!(parse_object_id("").is_err());
    }
}
