use shared_models::{NewDoctor, NewHospital};

pub fn mock_doctors() -> Vec<NewDoctor> {
    vec![
        NewDoctor {
            name: "Dr. Sarah Johnson".to_string(),
            specialization: "Cardiology".to_string(),
            experience: 15,
            rating: "4.9".to_string(),
            review_count: 127,
            fee: "150.00".to_string(),
            gender: "Female".to_string(),
            location: "New York, NY".to_string(),
            hospital: "Manhattan Medical Center".to_string(),
            about: "Dr. Sarah Johnson is a board-certified cardiologist with over 15 years of experience in cardiovascular medicine. She specializes in preventive cardiology, heart disease management, and cardiac rehabilitation.".to_string(),
            education: "MD - Harvard Medical School, Residency - Johns Hopkins Hospital".to_string(),
            image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300".to_string(),
            is_available: true,
        },
        NewDoctor {
            name: "Dr. Michael Chen".to_string(),
            specialization: "Neurology".to_string(),
            experience: 12,
            rating: "4.8".to_string(),
            review_count: 89,
            fee: "175.00".to_string(),
            gender: "Male".to_string(),
            location: "New York, NY".to_string(),
            hospital: "Central Hospital".to_string(),
            about: "Dr. Michael Chen is a renowned neurologist specializing in brain disorders and nervous system conditions. He has extensive experience in treating stroke, epilepsy, and neurodegenerative diseases.".to_string(),
            education: "MD - Stanford Medical School, Residency - Mayo Clinic".to_string(),
            image_url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300".to_string(),
            is_available: true,
        },
        NewDoctor {
            name: "Dr. Emily Rodriguez".to_string(),
            specialization: "Pediatrics".to_string(),
            experience: 10,
            rating: "4.9".to_string(),
            review_count: 203,
            fee: "125.00".to_string(),
            gender: "Female".to_string(),
            location: "Los Angeles, CA".to_string(),
            hospital: "Children's Medical Center".to_string(),
            about: "Dr. Emily Rodriguez is a compassionate pediatrician dedicated to providing comprehensive healthcare for children from infancy through adolescence.".to_string(),
            education: "MD - UCLA Medical School, Residency - Children's Hospital LA".to_string(),
            image_url: "https://images.unsplash.com/photo-1582750433449-648ed127bb54?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=300".to_string(),
            is_available: true,
        },
    ]
}

pub fn mock_hospitals() -> Vec<NewHospital> {
    vec![
        NewHospital {
            name: "Manhattan Medical Center".to_string(),
            location: "New York, NY".to_string(),
            address: "123 Medical Plaza, New York, NY 10001".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "info@manhattanmedical.com".to_string(),
        },
        NewHospital {
            name: "Central Hospital".to_string(),
            location: "New York, NY".to_string(),
            address: "456 Health Street, New York, NY 10002".to_string(),
            phone: "(555) 234-5678".to_string(),
            email: "contact@centralhospital.com".to_string(),
        },
    ]
}
