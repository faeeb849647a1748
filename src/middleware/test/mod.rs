use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AdminSession, CustomerSession},
    },
};
use test_utils::{builder::TestBuilder, factory};
