mod submit_contact_service;
mod update_message_status_service;

pub use submit_contact_service::SubmitContactService;
pub use update_message_status_service::UpdateMessageStatusService;
