//! Application error handling

mod app_error;
mod translator;

pub use app_error::{AppError, AppResult, ErrorResponse, SERVER_FAILURE_MESSAGE};
pub use translator::DomainErrorTranslator;
