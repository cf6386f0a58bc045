//! Model to entity mappers
//!
//! `From<Model> for Record` impls convert database rows into the plain records
//! the use cases consume. Timestamps leave the database as RFC 3339 strings.

mod detail;
mod id;

pub use detail::format_timestamp;
pub use id::generate_id;
