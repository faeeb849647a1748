use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AdminSession,
    service::password,
};

/// Administrator account handling.
///
/// Admins are a separate principal type from customers; logging in
/// here establishes an admin session key that customer routes never
/// consult.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates an admin by username and password and
    /// establishes an admin session.
    pub async fn login(
        &self,
        session: &Session,
        username: &str,
        password_input: &str,
    ) -> Result<entity::admin::Model, AppError> {
        let admin = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(password_input, &admin.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        AdminSession::new(session).set_id(admin.id).await?;

        Ok(admin)
    }
}
