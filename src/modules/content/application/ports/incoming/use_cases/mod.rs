mod content_error;
mod create_content;
mod delete_content;
mod get_content;
mod list_content;
mod singleton;
mod update_content;

pub use content_error::ContentError;
pub use create_content::CreateContentUseCase;
pub use delete_content::DeleteContentUseCase;
pub use get_content::GetContentUseCase;
pub use list_content::ListContentUseCase;
pub use singleton::{GetSingletonUseCase, UpdateSingletonUseCase};
pub use update_content::UpdateContentUseCase;
