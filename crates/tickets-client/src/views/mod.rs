//! View models for the ticket list, ticket details and new-ticket form.
//!
//! Each model is built from query results and renders as plain text through
//! [`std::fmt::Display`], which is what `ticketctl` prints.

mod new_ticket;
mod ticket_details;
mod ticket_list;

pub use new_ticket::{DESCRIPTION_MAX_LEN, NewTicketForm, NewTicketFormError};
pub use ticket_details::{
    AssigneeChange, StatusChange, TicketDetailsView, TicketStatus, TicketStatusParseError,
};
pub use ticket_list::{FilterOption, TicketListState, TicketListView, TicketRow};

use ticket_models::{User, UserId};

/// Label shown for a ticket's assignee.
///
/// `Unassigned` when nobody is assigned, the user's name when the directory
/// resolves the id, and `Unknown` when it does not or could not be loaded.
///
/// # Examples
/// ```
/// use tickets_client::views::assignee_label;
/// use tickets_client::UserId;
///
/// assert_eq!(assignee_label(None, None), "Unassigned");
/// assert_eq!(assignee_label(Some(UserId::new(7)), None), "Unknown");
/// ```
#[must_use]
pub fn assignee_label(assignee: Option<UserId>, users: Option<&[User]>) -> String {
    let Some(id) = assignee else {
        return "Unassigned".to_owned();
    };
    users
        .and_then(|users| users.iter().find(|user| user.id() == id))
        .map_or_else(|| "Unknown".to_owned(), |user| user.name().to_string())
}
