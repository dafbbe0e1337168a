pub mod api;
pub mod config;
pub mod health;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::health::ReadinessProbe;
use crate::infrastructure::DocumentStore;
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::catalog::{content_indexes, seed_tasks};
use crate::modules::certifications::domain::Certification;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::content::application::content_use_cases::{ContentUseCases, SingletonUseCases};
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::Experience;
use crate::modules::personal::domain::PersonalInfo;
use crate::modules::projects::domain::Project;
use crate::modules::seed::application::services::SeedReconciler;
use crate::modules::settings::domain::Settings;
use crate::modules::skills::application::skill_use_cases::SkillUseCases;
use crate::modules::testimonials::domain::Testimonial;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub personal: SingletonUseCases<PersonalInfo>,
    pub projects: ContentUseCases<Project>,
    pub experiences: ContentUseCases<Experience>,
    pub skills: SkillUseCases,
    pub education: ContentUseCases<Education>,
    pub certifications: ContentUseCases<Certification>,
    pub testimonials: ContentUseCases<Testimonial>,
    pub blog: BlogUseCases,
    pub contact: ContactUseCases,
    pub settings: SingletonUseCases<Settings>,
    pub readiness: Arc<dyn ReadinessProbe + Send + Sync>,
}

impl AppState {
    pub fn assemble<P: RepositoryProvider>(
        provider: &P,
        readiness: Arc<dyn ReadinessProbe + Send + Sync>,
    ) -> Self {
        Self {
            personal: SingletonUseCases::assemble(provider),
            projects: ContentUseCases::assemble(provider),
            experiences: ContentUseCases::assemble(provider),
            skills: SkillUseCases::assemble(provider),
            education: ContentUseCases::assemble(provider),
            certifications: ContentUseCases::assemble(provider),
            testimonials: ContentUseCases::assemble(provider),
            blog: BlogUseCases::assemble(provider),
            contact: ContactUseCases::assemble(provider),
            settings: SingletonUseCases::assemble_with_default(provider),
            readiness,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = DocumentStore::connect(&config.store)
        .await
        .context("document store unavailable")?;

    store.ensure_indexes(&content_indexes()).await;

    if config.seed.enabled {
        SeedReconciler::new(seed_tasks(&store, &config.seed))
            .run()
            .await;
    } else {
        info!("Seeding disabled (SEED_ON_STARTUP=false)");
    }

    let state = AppState::assemble(&store, Arc::new(store.clone()));
    let server_url = config.server.bind_address();
    info!("Server run on: {}", server_url);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url);

    let served = match server {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    store.disconnect().await;
    served.with_context(|| format!("server on {} stopped with an error", server_url))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        blog::adapter::incoming::web as blog, certifications::adapter::incoming::web as certifications,
        contact::adapter::incoming::web as contact, education::adapter::incoming::web as education,
        experience::adapter::incoming::web as experience, personal::adapter::incoming::web as personal,
        projects::adapter::incoming::web as projects, settings::adapter::incoming::web as settings,
        skills::adapter::incoming::web as skills, testimonials::adapter::incoming::web as testimonials,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public
    cfg.service(personal::get_personal_handler);
    cfg.service(projects::get_projects_handler);
    cfg.service(projects::get_featured_projects_handler);
    cfg.service(projects::get_project_handler);
    cfg.service(experience::get_experiences_handler);
    cfg.service(skills::get_skills_handler);
    cfg.service(education::get_education_handler);
    cfg.service(certifications::get_certifications_handler);
    cfg.service(testimonials::get_testimonials_handler);
    cfg.service(blog::get_blog_posts_handler);
    cfg.service(blog::get_featured_blog_posts_handler);
    cfg.service(blog::get_blog_post_handler);
    cfg.service(contact::submit_contact_handler);
    // Admin
    cfg.service(personal::get_admin_personal_handler);
    cfg.service(personal::update_personal_handler);
    cfg.service(projects::list_admin_projects_handler);
    cfg.service(projects::create_project_handler);
    cfg.service(projects::update_project_handler);
    cfg.service(projects::delete_project_handler);
    cfg.service(experience::list_admin_experiences_handler);
    cfg.service(experience::create_experience_handler);
    cfg.service(experience::update_experience_handler);
    cfg.service(experience::delete_experience_handler);
    cfg.service(skills::list_admin_skills_handler);
    cfg.service(skills::create_skill_handler);
    cfg.service(skills::update_skill_handler);
    cfg.service(skills::delete_skill_handler);
    cfg.service(education::list_admin_education_handler);
    cfg.service(education::create_education_handler);
    cfg.service(education::update_education_handler);
    cfg.service(education::delete_education_handler);
    cfg.service(certifications::list_admin_certifications_handler);
    cfg.service(certifications::create_certification_handler);
    cfg.service(certifications::update_certification_handler);
    cfg.service(certifications::delete_certification_handler);
    cfg.service(testimonials::list_admin_testimonials_handler);
    cfg.service(testimonials::create_testimonial_handler);
    cfg.service(testimonials::update_testimonial_handler);
    cfg.service(testimonials::delete_testimonial_handler);
    cfg.service(blog::list_admin_blog_posts_handler);
    cfg.service(blog::create_blog_post_handler);
    cfg.service(blog::update_blog_post_handler);
    cfg.service(blog::delete_blog_post_handler);
    cfg.service(contact::list_messages_handler);
    cfg.service(contact::update_message_status_handler);
    cfg.service(settings::get_settings_handler);
    cfg.service(settings::update_settings_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e:#}");
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
