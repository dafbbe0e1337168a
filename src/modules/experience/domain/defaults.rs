use super::entities::Experience;
use crate::modules::content::domain::values::{calendar_date, string_list as strings};

pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            title: "Software Developer Intern".to_string(),
            company: "Walmart".to_string(),
            location: "Remote".to_string(),
            kind: "Virtual Internship".to_string(),
            start_date: calendar_date(2024, 6, 1),
            end_date: Some(calendar_date(2024, 8, 1)),
            current: false,
            description: "Designed scalable software modules with clean architecture, built \
                          optimized data structures improving runtime efficiency, and created \
                          database schemas to enhance data retrieval performance."
                .to_string(),
            achievements: strings(&[
                "Designed scalable software modules with clean architecture",
                "Built optimized data structures, improving runtime efficiency by 25%",
                "Created database schemas to improve data retrieval performance",
                "Collaborated with cross-functional teams in agile environment",
            ]),
            skills: strings(&[
                "Python",
                "Data Structures",
                "Algorithm Optimization",
                "Database Design",
                "Agile",
            ]),
        },
        Experience {
            title: "Software Development Engineer".to_string(),
            company: "Accenture".to_string(),
            location: "Remote".to_string(),
            kind: "Virtual Internship".to_string(),
            start_date: calendar_date(2024, 3, 1),
            end_date: Some(calendar_date(2024, 5, 1)),
            current: false,
            description: "Migrated applications to AWS/GCP cloud infrastructure, improved \
                          performance through debugging & optimization, and conducted \
                          comprehensive UAT & security testing."
                .to_string(),
            achievements: strings(&[
                "Migrated applications to AWS/GCP cloud infrastructure",
                "Improved application performance by 30% through debugging & optimization",
                "Conducted UAT & security testing including IAM policies",
                "Implemented CI/CD pipelines for automated deployment",
            ]),
            skills: strings(&[
                "AWS",
                "GCP",
                "Cloud Migration",
                "Performance Optimization",
                "Security Testing",
                "IAM",
            ]),
        },
    ]
}
