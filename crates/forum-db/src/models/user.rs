//! User database model

use sqlx::FromRow;

/// Public columns of the users table
#[derive(Debug, Clone, FromRow)]
pub struct RegisteredUserModel {
    pub id: String,
    pub username: String,
    pub fullname: String,
}
