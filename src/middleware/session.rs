//! Type-safe session management wrappers.
//!
//! Customer and admin logins live under different session keys, so the
//! two principal types can never be confused: an admin session grants
//! nothing on customer routes and vice versa. Each wrapper exposes only
//! the methods for its own concern.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_CUSTOMER_DNI: &str = "auth:customer_dni";
const SESSION_ADMIN_ID: &str = "auth:admin_id";

/// Customer authentication state stored in the session.
pub struct CustomerSession<'a> {
    session: &'a Session,
}

impl<'a> CustomerSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the customer's DNI after a successful login.
    pub async fn set_dni(&self, dni: i64) -> Result<(), AppError> {
        self.session.insert(SESSION_CUSTOMER_DNI, dni).await?;
        Ok(())
    }

    /// Retrieves the logged-in customer's DNI.
    ///
    /// # Returns
    /// - `Ok(Some(dni))` - A customer is logged in
    /// - `Ok(None)` - No customer in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session
    pub async fn get_dni(&self) -> Result<Option<i64>, AppError> {
        let dni = self.session.get::<i64>(SESSION_CUSTOMER_DNI).await?;
        Ok(dni)
    }

    /// Clears all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Admin authentication state stored in the session.
pub struct AdminSession<'a> {
    session: &'a Session,
}

impl<'a> AdminSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the admin's id after a successful login.
    pub async fn set_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in admin's id.
    pub async fn get_id(&self) -> Result<Option<i32>, AppError> {
        let admin_id = self.session.get::<i32>(SESSION_ADMIN_ID).await?;
        Ok(admin_id)
    }

    /// Clears all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
