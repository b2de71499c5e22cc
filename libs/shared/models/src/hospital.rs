use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHospital {
    pub name: String,
    pub location: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Hospital {
    pub fn from_new(id: String, new: NewHospital) -> Self {
        Self {
            id,
            name: new.name,
            location: new.location,
            address: new.address,
            phone: new.phone,
            email: new.email,
        }
    }
}
