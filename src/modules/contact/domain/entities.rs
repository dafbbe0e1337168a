use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::require_non_empty;
use crate::modules::content::domain::{Entity, Validate, ValidationError};

pub const SUBMITTED_MESSAGE: &str = "Contact message submitted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// A visitor's message. Created through the public contact form only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Full replacement of the mutable part of a message; `status` is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageStatusUpdate {
    pub status: MessageStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub id: String,
    pub message: String,
}

impl ContactMessageCreate {
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject,
            message: self.message,
            status: MessageStatus::New,
        }
    }
}

impl Validate for ContactMessageCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("subject", &self.subject)?;
        require_non_empty("message", &self.message)?;

        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(ValidationError::Invalid {
                field: "email",
                reason: "not a valid e-mail address".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for ContactMessage {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("message", &self.message)
    }
}

impl Validate for MessageStatusUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Entity for ContactMessage {
    const COLLECTION: &'static str = "contact_messages";
    const LABEL: &'static str = "Message";
    const CODE: &'static str = "MESSAGE";
    const ADMIN_SORT_FIELD: &'static str = "created_at";
    type Update = MessageStatusUpdate;
}
