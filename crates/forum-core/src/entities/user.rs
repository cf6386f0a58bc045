//! User entities - registration and login payloads

use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use super::payload::Payload;
use crate::error::{DomainError, DomainResult};

fn username_characters(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("restricted_character"))
    }
}

/// Account registration request
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterUser {
    #[validate(length(max = 50), custom(function = username_characters))]
    username: String,
    password: String,
    fullname: String,
}

impl RegisterUser {
    pub const CODE: &'static str = "REGISTER_USER";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload =
            Payload::require(Self::CODE, payload, &["username", "password", "fullname"])?;

        let user = Self {
            username: payload.string("username")?,
            password: payload.string("password")?,
            fullname: payload.string("fullname")?,
        };

        user.validate().map_err(|errors| {
            let too_long = errors
                .field_errors()
                .get("username")
                .is_some_and(|errs| errs.iter().any(|e| e.code == "length"));
            if too_long {
                DomainError::UsernameLimitChar
            } else {
                DomainError::UsernameRestrictedCharacter
            }
        })?;

        Ok(user)
    }

    /// Same registration with the plain password replaced by its hash
    pub fn with_hashed_password(self, hashed: String) -> Self {
        Self {
            password: hashed,
            ..self
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

/// Account as stored, without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    id: String,
    username: String,
    fullname: String,
}

impl RegisteredUser {
    pub const CODE: &'static str = "REGISTERED_USER";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["id", "username", "fullname"])?;

        Ok(Self {
            id: payload.string("id")?,
            username: payload.string("username")?,
            fullname: payload.string("fullname")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

/// Login credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    username: String,
    password: String,
}

impl UserLogin {
    pub const CODE: &'static str = "USER_LOGIN";

    pub fn new(payload: &Value) -> DomainResult<Self> {
        let payload = Payload::require(Self::CODE, payload, &["username", "password"])?;

        Ok(Self {
            username: payload.string("username")?,
            password: payload.string("password")?,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
