pub mod defaults;
pub mod entities;

pub use entities::{Testimonial, TestimonialUpdate};
