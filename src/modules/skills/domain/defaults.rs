use super::entities::Skill;

pub const DEFAULT_SKILL_LEVEL: u8 = 85;

const TECHNICAL_SKILLS: [(&str, &[&str]); 6] = [
    ("Programming Languages", &["C/C++", "Python", "JavaScript"]),
    (
        "Web Technologies",
        &[
            "HTML",
            "CSS",
            "React",
            "Bootstrap",
            "Tailwind CSS",
            "Node.js",
            "Express.js",
        ],
    ),
    ("Databases", &["SQL", "MongoDB", "MongoDB Atlas"]),
    ("Cloud & DevOps", &["AWS", "GCP", "Docker", "Git", "GitHub"]),
    ("ML Libraries", &["Scikit-learn", "Pandas", "NumPy", "Matplotlib"]),
    ("Tools & IDEs", &["VS Code", "Linux", "Windows"]),
];

pub fn default_skills() -> Vec<Skill> {
    TECHNICAL_SKILLS
        .iter()
        .flat_map(|(category, names)| {
            names.iter().map(move |name| Skill {
                category: category.to_string(),
                name: name.to_string(),
                level: DEFAULT_SKILL_LEVEL,
                years_experience: None,
            })
        })
        .collect()
}
