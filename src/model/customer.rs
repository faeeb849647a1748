use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterCustomerDto {
    pub dni: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: i64,
    pub password: String,
}

/// Public view of a customer. Never carries the password hash.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct CustomerDto {
    pub dni: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: i64,
}

impl CustomerDto {
    pub fn from_model(model: entity::customer::Model) -> Self {
        Self {
            dni: model.dni,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Deserialize, Default, ToSchema)]
pub struct UpdateCustomerDto {
    pub email: Option<String>,
    pub phone: Option<i64>,
    pub password: Option<String>,
}
