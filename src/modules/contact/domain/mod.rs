pub mod entities;

pub use entities::{
    ContactMessage, ContactMessageCreate, ContactReceipt, MessageStatus, MessageStatusUpdate,
    SUBMITTED_MESSAGE,
};
