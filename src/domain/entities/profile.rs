use std::fmt;

use crate::domain::entities::id::Id;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Id<Profile>,
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub photo: String,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A profile that has not been stored yet. The store assigns its id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub photo: String,
}

impl NewProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gender: String,
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
        country: &str,
        city: &str,
        photo: String,
    ) -> Self {
        Self {
            gender,
            first_name,
            last_name,
            phone,
            email,
            location: format!("{}, {}", country, city),
            photo,
        }
    }

    pub fn into_profile(self, id: Id<Profile>) -> Profile {
        Profile {
            id,
            gender: self.gender,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            location: self.location,
            photo: self.photo,
        }
    }
}
