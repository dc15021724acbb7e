//! Todo entity, identifiers, and input validation.
//!
//! ## Invariants
//! - A [`TodoDescription`] is trimmed, non-empty, and came from raw input of
//!   at most [`MAX_DESCRIPTION_LENGTH`] characters.
//! - A [`TodoId`] is always a 12-byte store identifier; its textual form is
//!   24 lowercase hex digits.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted description length, counted in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

const TODO_ID_BYTES: usize = 12;

/// Validation failures raised while turning raw input into domain values.
///
/// The `Display` output is the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoValidationError {
    /// Description is missing or only whitespace.
    #[error("Description cannot be empty")]
    EmptyDescription,
    /// Raw description is longer than the permitted maximum.
    #[error("Description exceeds {max} characters")]
    DescriptionTooLong { max: usize },
    /// Identifier is not 24 hexadecimal digits.
    #[error("Invalid todo ID format")]
    InvalidId,
}

/// Store-assigned todo identifier.
///
/// # Examples
/// ```
/// use todo_backend::domain::TodoId;
///
/// let id: TodoId = "65F1A2B3C4D5E6F708192A3B".parse().expect("valid id");
/// assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708192a3b");
/// assert!("not-a-valid-id".parse::<TodoId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId([u8; TODO_ID_BYTES]);

impl TodoId {
    /// Parse the textual identifier supplied by clients.
    pub fn parse(raw: &str) -> Result<Self, TodoValidationError> {
        let mut bytes = [0_u8; TODO_ID_BYTES];
        hex::decode_to_slice(raw, &mut bytes).map_err(|_| TodoValidationError::InvalidId)?;
        Ok(Self(bytes))
    }

    /// Wrap raw identifier bytes read back from the store.
    pub const fn from_bytes(bytes: [u8; TODO_ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes for the persistence adapter.
    pub const fn bytes(&self) -> [u8; TODO_ID_BYTES] {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = TodoValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Validated, trimmed todo description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDescription(String);

impl TodoDescription {
    /// Borrow the description text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TodoDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<TodoDescription> for String {
    fn from(value: TodoDescription) -> Self {
        value.0
    }
}

/// Validate a raw description and return its trimmed form.
///
/// The length limit applies to the raw input, before trimming, so padding
/// counts towards the limit.
///
/// # Examples
/// ```
/// use todo_backend::domain::{TodoValidationError, validate_description};
///
/// let description = validate_description("  water the plants ").expect("valid");
/// assert_eq!(description.as_str(), "water the plants");
/// assert_eq!(
///     validate_description("   "),
///     Err(TodoValidationError::EmptyDescription)
/// );
/// ```
pub fn validate_description(raw: &str) -> Result<TodoDescription, TodoValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoValidationError::EmptyDescription);
    }
    if raw.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(TodoValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(TodoDescription(trimmed.to_owned()))
}

/// A todo awaiting insertion; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    description: TodoDescription,
    created_at: DateTime<Utc>,
}

impl TodoDraft {
    /// Build a new, not yet completed, todo stamped with `created_at`.
    pub fn new(description: TodoDescription, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            created_at,
        }
    }

    /// Validated description.
    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    /// New todos always start incomplete.
    pub const fn completed(&self) -> bool {
        false
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Combine the draft with the identifier assigned by the store.
    pub fn into_todo(self, id: TodoId) -> Todo {
        let completed = self.completed();
        Todo {
            id: id.to_string(),
            description: self.description.into(),
            completed,
            created_at: Some(self.created_at),
        }
    }
}

/// A todo as read back from the store.
///
/// Stored documents may lack fields, so `description` may be empty and
/// `created_at` may be absent. `id` is the stored key in string form:
/// ObjectIds render as lowercase hex, and keys written by other clients keep
/// their own representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// API-facing todo representation.
///
/// `created_at` is an RFC 3339 UTC timestamp with millisecond precision, or
/// `null` when the stored todo has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Option<String>,
}

impl From<Todo> for TodoRecord {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id,
            description: value.description,
            completed: value.completed,
            created_at: value
                .created_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Project a stored todo into its API representation.
pub fn serialize_todo(todo: Todo) -> TodoRecord {
    TodoRecord::from(todo)
}
