pub mod entity;
pub mod patch;
pub mod query;
pub mod record;
pub mod validation;
pub mod values;

pub use entity::{Entity, Seedable};
pub use patch::{FieldPatch, PatchError};
pub use query::{ListRequest, SortDirection, SortSpec, ADMIN_LIST_CAP, PUBLIC_LIST_CAP};
pub use record::{Record, RecordError, Stored};
pub use validation::{Validate, ValidationError};
