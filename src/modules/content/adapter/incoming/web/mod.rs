pub mod handlers;
pub mod responses;

pub use handlers::{create_record, delete_record, get_record, list_records, update_record};
pub use responses::content_error_response;
