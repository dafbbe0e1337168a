use mongodb::bson::doc;

use crate::config::SeedConfig;
use crate::infrastructure::document_store::IndexSpec;
use crate::modules::blog::domain::defaults::default_blog_posts;
use crate::modules::blog::domain::BlogPost;
use crate::modules::certifications::domain::defaults::default_certifications;
use crate::modules::certifications::domain::Certification;
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::content::domain::{Entity, Seedable};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::education::domain::defaults::default_education;
use crate::modules::education::domain::Education;
use crate::modules::experience::domain::defaults::default_experiences;
use crate::modules::experience::domain::Experience;
use crate::modules::personal::domain::defaults::default_personal_info;
use crate::modules::projects::domain::defaults::default_projects;
use crate::modules::projects::domain::Project;
use crate::modules::seed::application::ports::SeedTask;
use crate::modules::seed::application::services::CollectionSeeder;
use crate::modules::settings::domain::Settings;
use crate::modules::skills::domain::defaults::default_skills;
use crate::modules::skills::domain::Skill;
use crate::modules::testimonials::domain::defaults::default_testimonials;
use crate::modules::testimonials::domain::Testimonial;

//
// ──────────────────────────────────────────────────────────
// Collections known to the service
// ──────────────────────────────────────────────────────────
//

/// Indexes ensured at startup: slug uniqueness plus one compound index per
/// seeding natural key.
pub fn content_indexes() -> Vec<IndexSpec> {
    vec![
        IndexSpec::new(BlogPost::COLLECTION, doc! { "slug": 1 }).unique(),
        IndexSpec::new(BlogPost::COLLECTION, doc! { "status": 1, "published_at": -1 }),
        IndexSpec::new(Project::COLLECTION, doc! { "title": 1 }),
        IndexSpec::new(Experience::COLLECTION, doc! { "company": 1, "title": 1 }),
        IndexSpec::new(Skill::COLLECTION, doc! { "name": 1, "category": 1 }),
        IndexSpec::new(Education::COLLECTION, doc! { "degree": 1, "institution": 1 }),
        IndexSpec::new(Certification::COLLECTION, doc! { "title": 1, "issuer": 1 }),
        IndexSpec::new(Testimonial::COLLECTION, doc! { "name": 1, "company": 1 }),
        IndexSpec::new(ContactMessage::COLLECTION, doc! { "created_at": -1 }),
    ]
}

fn seeder<T, P>(provider: &P, defaults: Vec<T>, config: &SeedConfig) -> Box<dyn SeedTask>
where
    T: Seedable,
    P: RepositoryProvider,
{
    Box::new(CollectionSeeder::new(
        provider.repository::<T>(),
        defaults,
        config.policy_for(T::COLLECTION),
    ))
}

/// One seed task per collection that ships default content, in the order
/// they are seeded.
pub fn seed_tasks<P: RepositoryProvider>(provider: &P, config: &SeedConfig) -> Vec<Box<dyn SeedTask>> {
    vec![
        seeder(provider, vec![default_personal_info()], config),
        seeder(provider, default_projects(), config),
        seeder(provider, default_experiences(), config),
        seeder(provider, default_skills(), config),
        seeder(provider, default_education(), config),
        seeder(provider, default_certifications(), config),
        seeder(provider, default_testimonials(), config),
        seeder(provider, default_blog_posts(), config),
        seeder(provider, vec![Settings::default()], config),
    ]
}
