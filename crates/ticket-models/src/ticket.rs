//! Ticket aggregate and its value types.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::UserId;

/// Validation errors returned by [`TicketDescription::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketValidationError {
    /// The description is empty once trimmed of whitespace.
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Stable numeric ticket identifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// Identifier handed out when no ticket exists yet.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TicketId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TicketId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket description, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketDescription(String);

impl TicketDescription {
    /// Trim and validate a description.
    ///
    /// # Errors
    /// Returns [`TicketValidationError::EmptyDescription`] when nothing is left
    /// after trimming.
    pub fn new(description: impl AsRef<str>) -> Result<Self, TicketValidationError> {
        let trimmed = description.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TicketValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the description.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TicketDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TicketDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TicketDescription> for String {
    fn from(value: TicketDescription) -> Self {
        value.0
    }
}

impl TryFrom<String> for TicketDescription {
    type Error = TicketValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A unit of work with an optional assignee and a completion flag.
///
/// ## Invariants
/// - `description` is non-empty once trimmed.
/// - `assignee_id`, when set, referenced an existing user at assignment time.
///
/// `assigneeId` is always serialised, as `null` when nobody is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    description: TicketDescription,
    #[serde(default)]
    assignee_id: Option<UserId>,
    #[serde(default)]
    completed: bool,
}

impl Ticket {
    /// A freshly created ticket: unassigned and open.
    #[must_use]
    pub const fn open(id: TicketId, description: TicketDescription) -> Self {
        Self {
            id,
            description,
            assignee_id: None,
            completed: false,
        }
    }

    /// Rebuild a ticket from stored parts.
    #[must_use]
    pub const fn from_parts(
        id: TicketId,
        description: TicketDescription,
        assignee_id: Option<UserId>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            description,
            assignee_id,
            completed,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Work description.
    #[must_use]
    pub const fn description(&self) -> &TicketDescription {
        &self.description
    }

    /// Current assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Whether the ticket is done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Hand the ticket to `user`.
    pub const fn assign(&mut self, user: UserId) {
        self.assignee_id = Some(user);
    }

    /// Clear the assignee. Unassigning an unassigned ticket is a no-op.
    pub const fn unassign(&mut self) {
        self.assignee_id = None;
    }

    /// Mark the ticket complete or incomplete.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Copy of this ticket with a different assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = assignee_id;
        self
    }
}

/// Request body for `POST /api/tickets`.
///
/// The description is carried raw so the server can report an empty value
/// as a validation failure instead of a malformed payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    /// Untrimmed description as typed by the user.
    pub description: String,
}

impl NewTicket {
    /// Wrap a raw description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
