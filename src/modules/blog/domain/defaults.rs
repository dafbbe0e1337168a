use chrono::{DateTime, Utc};

use super::entities::{BlogPost, BlogStatus};
use crate::modules::content::domain::values::{calendar_date, string_list as strings};

fn midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    calendar_date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

pub fn default_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "Building Scalable Web Applications with React and FastAPI".to_string(),
            slug: "building-scalable-web-applications-react-fastapi".to_string(),
            excerpt: "Learn how to create robust full-stack applications using React for the \
                      frontend and FastAPI for the backend, with practical examples and best \
                      practices."
                .to_string(),
            content: "Full blog content would go here...".to_string(),
            image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=400&fit=crop"
                .to_string(),
            tags: strings(&["React", "FastAPI", "Full-Stack", "Web Development"]),
            published_at: midnight(2024, 7, 15),
            read_time: "8 min read".to_string(),
            featured: true,
            status: BlogStatus::Published,
        },
        BlogPost {
            title: "Cloud Migration Strategies: AWS vs GCP".to_string(),
            slug: "cloud-migration-strategies-aws-vs-gcp".to_string(),
            excerpt: "A comprehensive comparison of AWS and GCP for cloud migration, covering \
                      costs, services, and implementation strategies."
                .to_string(),
            content: "Full blog content would go here...".to_string(),
            image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&h=400&fit=crop"
                .to_string(),
            tags: strings(&["AWS", "GCP", "Cloud Migration", "DevOps"]),
            published_at: midnight(2024, 7, 10),
            read_time: "12 min read".to_string(),
            featured: false,
            status: BlogStatus::Published,
        },
        BlogPost {
            title: "AI in Resume Analysis: Building Smart Parsing Systems".to_string(),
            slug: "ai-resume-analysis-smart-parsing-systems".to_string(),
            excerpt: "Explore how AI and machine learning can revolutionize resume parsing and \
                      analysis, with practical implementation examples."
                .to_string(),
            content: "Full blog content would go here...".to_string(),
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=400&fit=crop"
                .to_string(),
            tags: strings(&["AI", "Machine Learning", "Python", "Resume Analysis"]),
            published_at: midnight(2024, 7, 5),
            read_time: "10 min read".to_string(),
            featured: true,
            status: BlogStatus::Published,
        },
    ]
}
