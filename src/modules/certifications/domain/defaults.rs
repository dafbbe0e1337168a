use super::entities::Certification;
use crate::modules::content::domain::values::{calendar_date, string_list as strings};

pub fn default_certifications() -> Vec<Certification> {
    vec![
        Certification {
            title: "Web Development".to_string(),
            issuer: "IBM SkillsBuild".to_string(),
            date: calendar_date(2024, 1, 1),
            credential_id: Some("IBM-WD-2024".to_string()),
            description: "Comprehensive web development certification covering HTML, CSS, \
                          JavaScript, and modern frameworks."
                .to_string(),
            skills: strings(&["HTML", "CSS", "JavaScript", "React", "Node.js"]),
        },
        Certification {
            title: "Introduction to Artificial Intelligence".to_string(),
            issuer: "IBM SkillsBuild".to_string(),
            date: calendar_date(2024, 1, 1),
            credential_id: Some("IBM-AI-2024".to_string()),
            description: "Foundational AI concepts, machine learning algorithms, and practical \
                          applications."
                .to_string(),
            skills: strings(&["Machine Learning", "AI Concepts", "Python", "Data Analysis"]),
        },
        Certification {
            title: "Cloud Foundation".to_string(),
            issuer: "AWS Academy".to_string(),
            date: calendar_date(2024, 1, 1),
            credential_id: Some("AWS-CF-2024".to_string()),
            description: "Core AWS services, cloud computing fundamentals, and best practices."
                .to_string(),
            skills: strings(&["AWS", "Cloud Computing", "EC2", "S3", "IAM"]),
        },
        Certification {
            title: "Python Foundation".to_string(),
            issuer: "Infosys Springboard".to_string(),
            date: calendar_date(2023, 1, 1),
            credential_id: Some("IS-PY-2023".to_string()),
            description: "Python programming fundamentals, data structures, and object-oriented \
                          programming."
                .to_string(),
            skills: strings(&["Python", "OOP", "Data Structures", "Algorithms"]),
        },
    ]
}
