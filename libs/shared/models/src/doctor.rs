use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub experience: i32,
    /// Decimal string, e.g. "4.9".
    pub rating: String,
    pub review_count: i32,
    /// Consultation fee as a decimal string, e.g. "150.00".
    pub fee: String,
    pub gender: String,
    pub location: String,
    pub hospital: String,
    pub about: String,
    pub education: String,
    pub image_url: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub experience: i32,
    pub rating: String,
    pub review_count: i32,
    pub fee: String,
    pub gender: String,
    pub location: String,
    pub hospital: String,
    pub about: String,
    pub education: String,
    pub image_url: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl Doctor {
    pub fn from_new(id: String, new: NewDoctor) -> Self {
        Self {
            id,
            name: new.name,
            specialization: new.specialization,
            experience: new.experience,
            rating: new.rating,
            review_count: new.review_count,
            fee: new.fee,
            gender: new.gender,
            location: new.location,
            hospital: new.hospital,
            about: new.about,
            education: new.education,
            image_url: new.image_url,
            is_available: new.is_available,
        }
    }

    /// Case-insensitive substring match over name, specialization and hospital.
    pub fn matches_query(&self, lowercase_query: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_query)
            || self.specialization.to_lowercase().contains(lowercase_query)
            || self.hospital.to_lowercase().contains(lowercase_query)
    }
}
