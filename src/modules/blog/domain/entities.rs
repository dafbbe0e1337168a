use chrono::{DateTime, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::published_at;
use super::slug::check_slug;
use crate::modules::content::domain::validation::{non_empty_if_present, require_non_empty};
use crate::modules::content::domain::{Entity, Seedable, Validate, ValidationError};

pub const DEFAULT_BLOG_LIMIT: i64 = 50;
pub const MAX_BLOG_LIMIT: i64 = 100;
pub const FEATURED_BLOG_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
            BlogStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "published_at")]
    #[schema(value_type = Option<String>, example = "2024-07-15T00:00:00.000Z")]
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: BlogStatus,
}

/// Creation input. `slug` is derived from the title when omitted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BlogPostCreate {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "published_at")]
    #[schema(value_type = Option<String>)]
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: BlogStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BlogPostUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default, with = "published_at")]
    #[schema(value_type = Option<String>)]
    pub published_at: Option<DateTime<Utc>>,
    pub read_time: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<BlogStatus>,
}

impl BlogPostCreate {
    /// Finalises the post once the slug is settled.
    pub fn into_post(self, slug: String) -> BlogPost {
        BlogPost {
            title: self.title,
            slug,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image,
            tags: self.tags,
            published_at: self.published_at,
            read_time: self.read_time,
            featured: self.featured,
            status: self.status,
        }
    }
}

impl Validate for BlogPost {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        check_slug(&self.slug)
    }
}

impl Validate for BlogPostCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        match &self.slug {
            Some(slug) => check_slug(slug),
            None => Ok(()),
        }
    }
}

impl Validate for BlogPostUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_if_present("title", self.title.as_ref())?;
        match &self.slug {
            Some(slug) => check_slug(slug),
            None => Ok(()),
        }
    }
}

impl Entity for BlogPost {
    const COLLECTION: &'static str = "blog_posts";
    const LABEL: &'static str = "Blog post";
    const CODE: &'static str = "BLOG_POST";
    const PUBLIC_SORT_FIELD: &'static str = "published_at";
    const ADMIN_SORT_FIELD: &'static str = "created_at";
    type Update = BlogPostUpdate;
}

impl Seedable for BlogPost {
    fn natural_key(&self) -> Document {
        doc! { "slug": &self.slug }
    }
}
