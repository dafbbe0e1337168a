use super::entities::{Project, ProjectStatus};
use crate::modules::content::domain::values::{calendar_date, string_list as strings};

pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Cab-Match".to_string(),
            description: "A comprehensive cab-sharing platform built with modern web technologies, \
                          featuring real-time ride tracking, secure authentication, and interactive \
                          maps for seamless user experience."
                .to_string(),
            short_description: "Cab-sharing platform with real-time tracking and interactive maps"
                .to_string(),
            image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?crop=entropy&cs=srgb&fm=jpg&q=85"
                .to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1551650975-87deedd944c3?crop=entropy&cs=srgb&fm=jpg&q=85",
                "https://images.pexels.com/photos/9558775/pexels-photo-9558775.jpeg",
                "https://images.unsplash.com/photo-1503252947848-7338d3f92f31?crop=entropy&cs=srgb&fm=jpg&q=85",
            ]),
            live_url: "https://cab-match.vercel.app".to_string(),
            github_url: "https://github.com/Aftab0khan021/cab-match".to_string(),
            technologies: strings(&[
                "React",
                "FastAPI",
                "MongoDB Atlas",
                "JWT",
                "Maps API",
                "WebSocket",
                "Tailwind CSS",
            ]),
            features: strings(&[
                "Real-time ride tracking with interactive maps",
                "Secure JWT-based authentication system",
                "Role-based access control for riders and drivers",
                "Responsive UI for seamless mobile experience",
                "MongoDB Atlas for scalable data storage",
                "RESTful API architecture with FastAPI",
            ]),
            category: "Full-Stack Web Application".to_string(),
            status: ProjectStatus::Completed,
            start_date: calendar_date(2024, 4, 1),
            end_date: calendar_date(2024, 6, 1),
        },
        Project {
            title: "AI-Resume-Analyser".to_string(),
            description: "An intelligent resume analysis platform that leverages AI to parse, \
                          analyze, and provide insights on resumes. Built with full-stack \
                          architecture and deployed on cloud platforms."
                .to_string(),
            short_description: "AI-powered resume analysis and parsing platform".to_string(),
            image: "https://images.pexels.com/photos/6625655/pexels-photo-6625655.png".to_string(),
            images: strings(&[
                "https://images.pexels.com/photos/6625655/pexels-photo-6625655.png",
                "https://images.unsplash.com/photo-1585229259079-05ab82f93c7b?crop=entropy&cs=srgb&fm=jpg&q=85",
                "https://images.unsplash.com/photo-1601972602237-8c79241e468b?crop=entropy&cs=srgb&fm=jpg&q=85",
            ]),
            live_url: "https://bit.ly/4ncTTHC".to_string(),
            github_url: "https://github.com/Aftab0khan021/ai-resume-analyser".to_string(),
            technologies: strings(&[
                "React",
                "FastAPI",
                "MongoDB Atlas",
                "Python",
                "AI/ML",
                "Pandas",
                "NumPy",
                "Vercel",
                "Render",
            ]),
            features: strings(&[
                "Intelligent resume parsing and text extraction",
                "AI-powered skills and experience analysis",
                "Interactive dashboard for resume insights",
                "File upload with drag-and-drop functionality",
                "Cloud deployment with environment configurations",
                "RESTful API for seamless frontend integration",
            ]),
            category: "AI/ML Web Application".to_string(),
            status: ProjectStatus::Completed,
            start_date: calendar_date(2024, 1, 1),
            end_date: calendar_date(2024, 3, 1),
        },
    ]
}
