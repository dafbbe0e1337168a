use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::blog::domain::{BlogPost, BlogPostCreate, BlogPostUpdate, BlogStatus};
use crate::modules::certifications::domain::{Certification, CertificationUpdate};
use crate::modules::contact::domain::{
    ContactMessage, ContactMessageCreate, ContactReceipt, MessageStatus, MessageStatusUpdate,
};
use crate::modules::education::domain::{Education, EducationUpdate};
use crate::modules::experience::domain::{Experience, ExperienceUpdate};
use crate::modules::personal::domain::{AvailabilityStatus, PersonalInfo, PersonalInfoUpdate};
use crate::modules::projects::domain::{Project, ProjectStatus, ProjectUpdate};
use crate::modules::settings::domain::{Settings, SettingsUpdate};
use crate::modules::skills::domain::{Skill, SkillLevel, SkillUpdate, SkillsOverview};
use crate::modules::testimonials::domain::{Testimonial, TestimonialUpdate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and its admin management endpoints. \
                       Admin routes expect an authenticating gateway in front.",
    ),
    paths(
        // Personal
        crate::modules::personal::adapter::incoming::web::routes::get_personal_handler,
        crate::modules::personal::adapter::incoming::web::routes::update_personal_handler,

        // Projects
        crate::modules::projects::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::projects::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::projects::adapter::incoming::web::routes::get_project_handler,
        crate::modules::projects::adapter::incoming::web::routes::create_project_handler,

        // Experience
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,

        // Skills
        crate::modules::skills::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skills::adapter::incoming::web::routes::create_skill_handler,

        // Education, certifications, testimonials
        crate::modules::education::adapter::incoming::web::routes::get_education_handler,
        crate::modules::education::adapter::incoming::web::routes::create_education_handler,
        crate::modules::certifications::adapter::incoming::web::routes::get_certifications_handler,
        crate::modules::certifications::adapter::incoming::web::routes::create_certification_handler,
        crate::modules::testimonials::adapter::incoming::web::routes::get_testimonials_handler,
        crate::modules::testimonials::adapter::incoming::web::routes::create_testimonial_handler,

        // Blog
        crate::modules::blog::adapter::incoming::web::routes::get_blog_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_featured_blog_posts_handler,
        crate::modules::blog::adapter::incoming::web::routes::get_blog_post_handler,
        crate::modules::blog::adapter::incoming::web::routes::create_blog_post_handler,
        crate::modules::blog::adapter::incoming::web::routes::update_blog_post_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::list_messages_handler,

        // Settings
        crate::modules::settings::adapter::incoming::web::routes::get_settings_handler,
        crate::modules::settings::adapter::incoming::web::routes::update_settings_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content
            PersonalInfo,
            PersonalInfoUpdate,
            AvailabilityStatus,
            Project,
            ProjectUpdate,
            ProjectStatus,
            Experience,
            ExperienceUpdate,
            Skill,
            SkillUpdate,
            SkillLevel,
            SkillsOverview,
            Education,
            EducationUpdate,
            Certification,
            CertificationUpdate,
            Testimonial,
            TestimonialUpdate,
            BlogPost,
            BlogPostCreate,
            BlogPostUpdate,
            BlogStatus,
            ContactMessage,
            ContactMessageCreate,
            ContactReceipt,
            MessageStatus,
            MessageStatusUpdate,
            Settings,
            SettingsUpdate
        )
    ),
    tags(
        (name = "public", description = "Read-only portfolio content"),
        (name = "admin", description = "Content management endpoints"),
    )
)]
pub struct ApiDoc;
