use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginDto {
    pub username: String,
    pub password: String,
}
