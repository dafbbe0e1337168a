use super::entities::Education;
use crate::modules::content::domain::values::{calendar_date, string_list as strings};

pub fn default_education() -> Vec<Education> {
    vec![Education {
        degree: "Bachelor of Technology (B-Tech)".to_string(),
        field: "Computer Science & Engineering".to_string(),
        institution: "Lakshmi Narian College of Technology Excellence".to_string(),
        location: "Raisen Road, Bhopal, Madhya Pradesh".to_string(),
        start_date: calendar_date(2022, 8, 1),
        end_date: Some(calendar_date(2026, 6, 30)),
        current: true,
        gpa: Some("8.5/10".to_string()),
        description: "Comprehensive computer science program covering software engineering, \
                      data structures, algorithms, and modern development practices."
            .to_string(),
        achievements: strings(&[
            "Consistent academic performer with 8.5+ GPA",
            "Active participant in coding competitions",
            "Member of technical societies and programming clubs",
        ]),
    }]
}
