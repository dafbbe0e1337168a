use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty, require_range};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub company: String,
    pub image: String,
    pub text: String,
    /// 1-5 stars.
    pub rating: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TestimonialUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub rating: Option<u8>,
}

impl Validate for Testimonial {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("text", &self.text)?;
        require_range("rating", self.rating as i64, MIN_RATING, MAX_RATING)
    }
}

impl Validate for TestimonialUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("name", self.name.as_ref())?;
        non_empty_if_present("text", self.text.as_ref())?;
        if let Some(rating) = self.rating {
            require_range("rating", rating as i64, MIN_RATING, MAX_RATING)?;
        }
        Ok(())
    }
}

impl Entity for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const LABEL: &'static str = "Testimonial";
    const CODE: &'static str = "TESTIMONIAL";
    type Update = TestimonialUpdate;
}

impl Seedable for Testimonial {
    fn natural_key(&self) -> Document {
        doc! { "name": &self.name, "company": &self.company }
    }
}
