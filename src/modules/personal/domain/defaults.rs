use super::entities::{AvailabilityStatus, PersonalInfo};

pub fn default_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Aftab Pathan".to_string(),
        title: "Aspiring Software Engineer".to_string(),
        location: "Bhopal, Madhya Pradesh, India".to_string(),
        email: "paftab320@gmail.com".to_string(),
        phone: "+91 7089036313".to_string(),
        linkedin: "https://linkedin.com/in/aftab-khan-389282285".to_string(),
        github: Some("https://github.com/Aftab0khan021".to_string()),
        bio: "Passionate software engineer with a strong foundation in computer science and \
              hands-on experience in building clean, efficient, and user-centric software \
              solutions. Currently pursuing B-Tech with expertise in full-stack development \
              and cloud technologies."
            .to_string(),
        avatar: "/images/aftab.jpg".to_string(),
        resume: "/resume-aftab-pathan.pdf".to_string(),
        status: AvailabilityStatus::Available,
    }
}
