use serde::Deserialize;
use serde_json::Value;

use crate::application::app_error::AppError;
use crate::domain::entities::profile::{NewProfile, Profile};

/// One person as returned by the upstream API, before mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProfileRecord(pub Value);

#[derive(Debug, Deserialize)]
struct RandomUserRecord {
    gender: String,
    name: RandomUserName,
    phone: String,
    email: String,
    location: RandomUserLocation,
    picture: RandomUserPicture,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserLocation {
    country: String,
    city: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserPicture {
    large: String,
}

impl TryFrom<RawProfileRecord> for NewProfile {
    type Error = AppError;

    fn try_from(record: RawProfileRecord) -> Result<Self, Self::Error> {
        let record: RandomUserRecord = serde_json::from_value(record.0)?;
        Ok(NewProfile::new(
            record.gender,
            record.name.first,
            record.name.last,
            record.phone,
            record.email,
            &record.location.country,
            &record.location.city,
            record.picture.large,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: i64,
    pub full_name: String,
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub photo: String,
}

impl From<Profile> for ProfileDTO {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.value,
            full_name: profile.to_string(),
            gender: profile.gender,
            first_name: profile.first_name,
            last_name: profile.last_name,
            phone: profile.phone,
            email: profile.email,
            location: profile.location,
            photo: profile.photo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetProfileListDTO {
    pub page: Option<String>,
    pub per_page: i64,
}

#[derive(Debug, Clone)]
pub struct ProfileListDTO {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub num_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
    pub items: Vec<ProfileDTO>,
}

#[derive(Debug, Clone)]
pub struct GetProfileDTO {
    pub profile_id: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportProfilesDTO {
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportResultDTO {
    pub saved: usize,
}
