//! New-ticket form validation.

use thiserror::Error;
use ticket_models::{TicketDescription, UserId};

use crate::query::NewTicketRequest;

/// Longest description the form accepts, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Field errors shown under the description input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewTicketFormError {
    /// Nothing left after trimming.
    #[error("Description is required")]
    DescriptionRequired,
    /// Longer than [`DESCRIPTION_MAX_LEN`].
    #[error("Description must be at most 200 characters")]
    DescriptionTooLong,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicketForm {
    /// Description as typed.
    pub description: String,
    /// Selected assignee, if any.
    pub assignee: Option<UserId>,
}

impl NewTicketForm {
    /// Form pre-filled with `description` and `assignee`.
    #[must_use]
    pub fn new(description: impl Into<String>, assignee: Option<UserId>) -> Self {
        Self {
            description: description.into(),
            assignee,
        }
    }

    /// Trim and validate into a request for
    /// [`Queries::create_ticket`](crate::Queries::create_ticket).
    ///
    /// # Errors
    /// Returns a [`NewTicketFormError`] naming the failed rule.
    pub fn validate(&self) -> Result<NewTicketRequest, NewTicketFormError> {
        let trimmed = self.description.trim();
        if trimmed.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(NewTicketFormError::DescriptionTooLong);
        }
        let description =
            TicketDescription::new(trimmed).map_err(|_| NewTicketFormError::DescriptionRequired)?;
        Ok(NewTicketRequest {
            description,
            assignee: self.assignee,
        })
    }
}
