use crate::{
    error::{auth::AuthError, AppError},
    model::customer::{LoginDto, RegisterCustomerDto, UpdateCustomerDto},
    service::{customer::CustomerService, password},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;
mod update;

fn register_dto(dni: i64, email: &str) -> RegisterCustomerDto {
    RegisterCustomerDto {
        dni,
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        email: email.to_string(),
        phone: 600_123_456,
        password: "s3cret".to_string(),
    }
}
