use super::entities::Testimonial;

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Rajesh Kumar".to_string(),
            position: "Senior Software Engineer".to_string(),
            company: "Walmart".to_string(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face"
                .to_string(),
            text: "Aftab demonstrated exceptional problem-solving skills and delivered clean, \
                   scalable code. His ability to optimize data structures significantly improved \
                   our application performance."
                .to_string(),
            rating: 5,
        },
        Testimonial {
            name: "Priya Sharma".to_string(),
            position: "Technical Lead".to_string(),
            company: "Accenture".to_string(),
            image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face"
                .to_string(),
            text: "Working with Aftab was a pleasure. He quickly adapted to cloud technologies \
                   and delivered a 30% performance improvement in our migration project."
                .to_string(),
            rating: 5,
        },
        Testimonial {
            name: "Dr. Amit Verma".to_string(),
            position: "Professor".to_string(),
            company: "LNCTE".to_string(),
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                .to_string(),
            text: "Aftab is one of our most dedicated students. His passion for learning and \
                   ability to apply theoretical concepts to real-world projects is commendable."
                .to_string(),
            rating: 5,
        },
    ]
}
