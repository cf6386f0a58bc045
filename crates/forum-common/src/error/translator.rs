//! Translation of structured validation codes into client-facing messages

use super::app_error::AppError;

/// Catalog of every validation code a client can trigger
const MESSAGES: &[(&str, &str)] = &[
    ("REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot create new user because required property is missing."),
    ("REGISTER_USER.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot create new user because data type does not match."),
    ("REGISTER_USER.USERNAME_LIMIT_CHAR", "Cannot create new user because username characters exceed limit."),
    ("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER", "Cannot create new user because username contains restricted characters."),
    ("REGISTERED_USER.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot register user because required property is missing."),
    ("REGISTERED_USER.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot register user because data type does not match."),
    ("USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY", "Must submit username and password."),
    ("USER_LOGIN.NOT_MEET_DATA_TYPE_SPECIFICATION", "Username and password must be string."),
    ("NEW_AUTH.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot create authentication because required property is missing."),
    ("NEW_AUTH.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot create authentication because data type does not match."),
    ("REFRESH_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN", "Must send refresh token."),
    ("REFRESH_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION", "Refresh token must be string."),
    ("DELETE_AUTHENTICATION_USE_CASE.NOT_CONTAIN_REFRESH_TOKEN", "Must send refresh token."),
    ("DELETE_AUTHENTICATION_USE_CASE.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION", "Refresh token must be string."),
    ("NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot create new thread because required property is missing."),
    ("NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot create new thread because data type does not match."),
    ("ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot add thread because required property is missing."),
    ("ADDED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot add thread because data type does not match."),
    ("THREAD_DETAIL.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot view thread details because required property is missing."),
    ("THREAD_DETAIL.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot view thread details due to incorrect data type."),
    ("THREAD_DETAIL.COMMENTS_NOT_ARRAY", "Cannot view thread details because comments are not in array form."),
    ("NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot create new comment because required property is missing."),
    ("NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot create new comment because data type does not match."),
    ("ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot add comment because required property is missing."),
    ("ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot add comment because data type does not match."),
    ("NEW_REPLY.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot create new reply because required property is missing."),
    ("NEW_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot create new reply because data type does not match."),
    ("ADDED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY", "Cannot add reply because required property is missing."),
    ("ADDED_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION", "Cannot add reply because data type does not match."),
];

/// Maps domain validation codes to [`AppError::Invariant`]
pub struct DomainErrorTranslator;

impl DomainErrorTranslator {
    /// Look up the client message for a structured code
    #[must_use]
    pub fn message_for(code: &str) -> Option<&'static str> {
        MESSAGES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, message)| *message)
    }

    /// Translate a known validation code; any other error is returned unchanged
    #[must_use]
    pub fn translate(error: AppError) -> AppError {
        let message = match &error {
            AppError::Domain(domain) => Self::message_for(&domain.to_string()),
            _ => None,
        };

        match message {
            Some(message) => AppError::Invariant(message.to_string()),
            None => error,
        }
    }
}
