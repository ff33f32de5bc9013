//! Value types that make invalid item state unrepresentable.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Message returned by [`ItemName::new`] for an empty name.
pub const NAME_REQUIRED_MESSAGE: &str = "Name must be a non-empty string.";

/// Message for an update whose `name` is present but empty or null.
pub const INVALID_NAME_MESSAGE: &str = "Invalid name. Name must be a non-empty string.";

/// A task title that is guaranteed to be non-empty.
///
/// Whitespace-only names are accepted; only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::Validation(NAME_REQUIRED_MESSAGE.to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
