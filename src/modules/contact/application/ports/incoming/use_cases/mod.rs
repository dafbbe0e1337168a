mod submit_contact;
mod update_message_status;

pub use submit_contact::SubmitContactUseCase;
pub use update_message_status::UpdateMessageStatusUseCase;
