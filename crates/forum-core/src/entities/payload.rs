//! Raw payload access shared by every entity constructor
//!
//! Entities are built from loosely typed JSON. Presence of every required
//! field is checked before any field's type, so a payload that is both
//! incomplete and mistyped always reports the missing property.

use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Read-only view over a JSON object being validated under a code prefix
pub(crate) struct Payload<'a> {
    prefix: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> Payload<'a> {
    /// Wrap a payload and check that every `required` field is present and non-null.
    ///
    /// A payload that is not an object has none of its fields.
    pub(crate) fn require(
        prefix: &'static str,
        value: &'a Value,
        required: &[&str],
    ) -> DomainResult<Self> {
        let fields = value
            .as_object()
            .ok_or(DomainError::MissingProperty(prefix))?;

        let missing = required
            .iter()
            .any(|name| fields.get(*name).map_or(true, Value::is_null));
        if missing {
            return Err(DomainError::MissingProperty(prefix));
        }

        Ok(Self { prefix, fields })
    }

    /// Raw field access, for checks the generic helpers do not cover
    pub(crate) fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    pub(crate) fn string(&self, name: &str) -> DomainResult<String> {
        self.get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(DomainError::TypeMismatch(self.prefix))
    }

    pub(crate) fn integer(&self, name: &str) -> DomainResult<i64> {
        self.get(name)
            .and_then(Value::as_i64)
            .ok_or(DomainError::TypeMismatch(self.prefix))
    }

    pub(crate) fn boolean(&self, name: &str) -> DomainResult<bool> {
        self.get(name)
            .and_then(Value::as_bool)
            .ok_or(DomainError::TypeMismatch(self.prefix))
    }
}
