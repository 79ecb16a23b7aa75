//! Single-ticket screen and the edits it offers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use ticket_models::{Ticket, TicketId, User, UserId};

use super::assignee_label;

/// Error returned when parsing an unknown [`TicketStatus`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ticket status `{0}`; expected open or completed")]
pub struct TicketStatusParseError(String);

/// Completion state as offered by the status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    /// Not completed.
    Open,
    /// Completed.
    Completed,
}

impl TicketStatus {
    /// Selector options in display order.
    pub const OPTIONS: [Self; 2] = [Self::Open, Self::Completed];

    /// Status for a `completed` flag.
    #[must_use]
    pub const fn from_completed(completed: bool) -> Self {
        if completed { Self::Completed } else { Self::Open }
    }

    /// Whether this is [`TicketStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Completed => "Completed",
        }
    }

    /// Selector value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = TicketStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            _ => Err(TicketStatusParseError(s.to_owned())),
        }
    }
}

/// Call implied by picking an assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeChange {
    /// Selection equals the current assignee; nothing to send.
    Unchanged,
    /// Assign the ticket to this user.
    Assign(UserId),
    /// Clear the assignee.
    Unassign,
}

impl AssigneeChange {
    /// Compare the current assignee with the selection.
    #[must_use]
    pub fn between(current: Option<UserId>, selected: Option<UserId>) -> Self {
        match selected {
            _ if selected == current => Self::Unchanged,
            Some(user) => Self::Assign(user),
            None => Self::Unassign,
        }
    }

    /// Target assignee, or `None` when there is nothing to send.
    #[must_use]
    pub const fn target(self) -> Option<Option<UserId>> {
        match self {
            Self::Unchanged => None,
            Self::Assign(user) => Some(Some(user)),
            Self::Unassign => Some(None),
        }
    }
}

/// Call implied by picking a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Selection equals the current status.
    Unchanged,
    /// Mark complete.
    Complete,
    /// Mark incomplete.
    Reopen,
}

impl StatusChange {
    /// Compare the current status with the selection.
    #[must_use]
    pub fn between(current: TicketStatus, selected: TicketStatus) -> Self {
        match selected {
            _ if selected == current => Self::Unchanged,
            TicketStatus::Completed => Self::Complete,
            TicketStatus::Open => Self::Reopen,
        }
    }

    /// Completion flag to send, or `None` when unchanged.
    #[must_use]
    pub const fn target(self) -> Option<bool> {
        match self {
            Self::Unchanged => None,
            Self::Complete => Some(true),
            Self::Reopen => Some(false),
        }
    }
}

/// The ticket details screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDetailsView {
    id: TicketId,
    description: String,
    status: TicketStatus,
    assignee_id: Option<UserId>,
    assignee: String,
}

impl TicketDetailsView {
    /// Shown when the route parameter is not a ticket id.
    pub const INVALID_ID_MESSAGE: &'static str = "Invalid ticket ID";
    /// Assignee selector text when nobody is assigned.
    pub const ASSIGNEE_PLACEHOLDER: &'static str = "Select a user...";

    /// Parse a ticket id typed by a user.
    ///
    /// # Errors
    /// Returns [`Self::INVALID_ID_MESSAGE`] when `raw` is not an id.
    pub fn parse_id(raw: &str) -> Result<TicketId, &'static str> {
        raw.trim().parse().map_err(|_| Self::INVALID_ID_MESSAGE)
    }

    /// Build from the ticket and, when loaded, the user directory.
    #[must_use]
    pub fn new(ticket: &Ticket, users: Option<&[User]>) -> Self {
        let assignee = match ticket.assignee_id() {
            None => Self::ASSIGNEE_PLACEHOLDER.to_owned(),
            some => assignee_label(some, users),
        };
        Self {
            id: ticket.id(),
            description: ticket.description().to_string(),
            status: TicketStatus::from_completed(ticket.is_completed()),
            assignee_id: ticket.assignee_id(),
            assignee,
        }
    }

    /// `Ticket #<id>` heading.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Ticket #{}", self.id)
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Status options with the current one disabled.
    #[must_use]
    pub fn status_options(&self) -> [(TicketStatus, bool); 2] {
        TicketStatus::OPTIONS.map(|status| (status, status == self.status))
    }

    /// Whether the unassign action is offered.
    #[must_use]
    pub const fn can_unassign(&self) -> bool {
        self.assignee_id.is_some()
    }

    /// Change implied by selecting `user`.
    #[must_use]
    pub fn select_assignee(&self, user: Option<UserId>) -> AssigneeChange {
        AssigneeChange::between(self.assignee_id, user)
    }

    /// Change implied by selecting `status`.
    #[must_use]
    pub fn select_status(&self, status: TicketStatus) -> StatusChange {
        StatusChange::between(self.status, status)
    }
}

impl fmt::Display for TicketDetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        writeln!(f, "Status:      {}", self.status)?;
        writeln!(f, "Assignee:    {}", self.assignee)?;
        writeln!(f, "Description: {}", self.description)
    }
}
