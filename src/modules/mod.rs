pub mod blog;
pub mod catalog;
pub mod certifications;
pub mod contact;
pub mod content;
pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod seed;
pub mod settings;
pub mod skills;
pub mod testimonials;
