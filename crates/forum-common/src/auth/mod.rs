//! Authentication collaborators

mod jwt;
mod password;

pub use jwt::{Claims, JwtTokenManager};
pub use password::Argon2PasswordHash;
