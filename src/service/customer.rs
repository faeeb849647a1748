use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr,
};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::CustomerSession,
    model::customer::{CustomerDto, LoginDto, RegisterCustomerDto, UpdateCustomerDto},
    service::password,
};

/// Customer account handling: registration, login, profile updates.
pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer. The password is stored only as an
    /// argon2 hash.
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The created account's public profile
    /// - `Err(AppError::BadRequest(_))`: DNI or email already taken
    pub async fn register(&self, dto: RegisterCustomerDto) -> Result<CustomerDto, AppError> {
        let password_hash = password::hash_password(&dto.password)?;

        let result = entity::customer::ActiveModel {
            dni: ActiveValue::Set(dto.dni),
            first_name: ActiveValue::Set(dto.first_name),
            last_name: ActiveValue::Set(dto.last_name),
            email: ActiveValue::Set(dto.email),
            phone: ActiveValue::Set(dto.phone),
            password_hash: ActiveValue::Set(password_hash),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(customer) => Ok(CustomerDto::from_model(customer)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::BadRequest(
                    "DNI or email is already registered".to_string(),
                )),
                _ => Err(err.into()),
            },
        }
    }

    /// Authenticates a customer by email and password and establishes
    /// a customer session.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, session: &Session, dto: LoginDto) -> Result<CustomerDto, AppError> {
        let customer = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(&dto.email))
            .one(self.db)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(&dto.password, &customer.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        CustomerSession::new(session).set_dni(customer.dni).await?;

        Ok(CustomerDto::from_model(customer))
    }

    /// Updates the customer's contact data and/or password. Fields
    /// left as `None` are unchanged.
    pub async fn update(
        &self,
        customer: entity::customer::Model,
        dto: UpdateCustomerDto,
    ) -> Result<CustomerDto, AppError> {
        let mut active_model: entity::customer::ActiveModel = customer.into();

        if let Some(email) = dto.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = dto.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(new_password) = dto.password {
            active_model.password_hash = ActiveValue::Set(password::hash_password(&new_password)?);
        }

        let result = active_model.update(self.db).await;

        match result {
            Ok(updated) => Ok(CustomerDto::from_model(updated)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::BadRequest(
                    "Email is already registered".to_string(),
                )),
                _ => Err(err.into()),
            },
        }
    }
}
