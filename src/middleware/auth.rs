use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::{AdminSession, CustomerSession},
};

/// Resolves the session to a typed principal.
///
/// Two capability-scoped principal types exist: customers (identified
/// by DNI, may manage their own bookings) and admins (identified by
/// their account id, may search bookings and change room state). The
/// guard loads the principal row from the database so a stale session
/// pointing at a deleted account fails closed.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in customer.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated customer
    /// - `Err(AppError::AuthErr(_))` - Not logged in as a customer
    pub async fn require_customer(&self) -> Result<entity::customer::Model, AppError> {
        let Some(dni) = CustomerSession::new(self.session).get_dni().await? else {
            return Err(AuthError::CustomerNotInSession.into());
        };

        let Some(customer) = entity::prelude::Customer::find_by_id(dni).one(self.db).await? else {
            return Err(AuthError::CustomerNotInDatabase(dni).into());
        };

        Ok(customer)
    }

    /// Requires a logged-in admin. A customer session does not
    /// satisfy this, regardless of who the customer is.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated admin
    /// - `Err(AppError::AuthErr(_))` - Not logged in as an admin
    pub async fn require_admin(&self) -> Result<entity::admin::Model, AppError> {
        let Some(admin_id) = AdminSession::new(self.session).get_id().await? else {
            return Err(AuthError::AdminNotInSession.into());
        };

        let Some(admin) = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Id.eq(admin_id))
            .one(self.db)
            .await?
        else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        Ok(admin)
    }
}
