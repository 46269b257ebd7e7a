//! User identity as seen by the connections subsystem.
//!
//! Identity management lives elsewhere; this module only models the opaque
//! identifier and the display name shown next to it in reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the [`UserId`] and [`DisplayName`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    PaddedId,
    EmptyDisplayName,
    DisplayNameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::PaddedId => write!(f, "user id must not contain surrounding whitespace"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "display name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Opaque user identifier.
///
/// Nothing inspects its structure: it is compared, hashed and ordered as a
/// plain string. Ordering only exists so listings can be made deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use towntalk::domain::UserId;
    ///
    /// let id = UserId::new("b7c1e2a0-5d1f-4f0e-9a77-3c2e8d9f1a10").expect("valid id");
    /// assert_eq!(id.as_ref(), "b7c1e2a0-5d1f-4f0e-9a77-3c2e8d9f1a10");
    /// assert!(UserId::new(" padded ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for a display name, in characters.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Human readable display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A user reduced to what reports display: `{id, displayName}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, example = "b7c1e2a0-5d1f-4f0e-9a77-3c2e8d9f1a10")]
    id: UserId,
    #[schema(value_type = String, example = "Ada Lovelace")]
    display_name: DisplayName,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, display_name: DisplayName) -> Self {
        Self { id, display_name }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, DisplayName::new(display_name)?))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name shown to other users.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}
