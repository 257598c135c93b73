use serde::Serialize;
use utoipa::ToSchema;

use crate::adapter::http::schema::batch::BatchFormSchema;
use crate::application::dto::profile::{ProfileDTO, ProfileListDTO};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
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

impl From<ProfileDTO> for ProfileResponse {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            full_name: dto.full_name,
            gender: dto.gender,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            email: dto.email,
            location: dto.location,
            photo: dto.photo,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileListResponse {
    pub items: Vec<ProfileResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub num_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
    pub batch_form: BatchFormSchema,
}

impl From<ProfileListDTO> for ProfileListResponse {
    fn from(dto: ProfileListDTO) -> Self {
        Self {
            items: dto.items.into_iter().map(ProfileResponse::from).collect(),
            total: dto.total,
            page: dto.page,
            per_page: dto.per_page,
            num_pages: dto.num_pages,
            has_next: dto.has_next,
            has_previous: dto.has_previous,
            batch_form: BatchFormSchema::default(),
        }
    }
}
