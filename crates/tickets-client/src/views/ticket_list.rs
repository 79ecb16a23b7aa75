//! Ticket table with its status filter.

use std::fmt;

use ticket_models::{StatusFilter, Ticket, User};

use super::assignee_label;
use super::ticket_details::TicketStatus;
use crate::error::ClientError;

/// One entry of the status filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    /// Filter applied when chosen.
    pub filter: StatusFilter,
    /// Whether this is the active filter.
    pub selected: bool,
}

impl FilterOption {
    /// Text shown for the option.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.filter.label()
    }
}

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    /// `#<id>`.
    pub id: String,
    /// Ticket description.
    pub description: String,
    /// `Open` or `Completed`.
    pub status: &'static str,
    /// See [`assignee_label`].
    pub assignee: String,
}

impl TicketRow {
    fn new(ticket: &Ticket, users: Option<&[User]>) -> Self {
        Self {
            id: format!("#{}", ticket.id()),
            description: ticket.description().to_string(),
            status: TicketStatus::from_completed(ticket.is_completed()).label(),
            assignee: assignee_label(ticket.assignee_id(), users),
        }
    }
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketListState {
    /// At least one ticket matched.
    Rows(Vec<TicketRow>),
    /// The query succeeded with no tickets.
    Empty,
    /// The ticket query failed.
    Error,
}

/// The ticket list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketListView {
    filter: StatusFilter,
    state: TicketListState,
}

impl TicketListView {
    /// Text of the empty state.
    pub const EMPTY_MESSAGE: &'static str = "No tickets found";
    /// Text of the error state.
    pub const ERROR_MESSAGE: &'static str = "Error loading tickets";

    /// Build the view from the list query and the user directory query.
    ///
    /// A failed user query only degrades assignee labels to `Unknown`.
    #[must_use]
    pub fn new(
        filter: StatusFilter,
        tickets: Result<&[Ticket], &ClientError>,
        users: Result<&[User], &ClientError>,
    ) -> Self {
        let state = match tickets {
            Err(_) => TicketListState::Error,
            Ok([]) => TicketListState::Empty,
            Ok(tickets) => {
                let users = users.ok();
                TicketListState::Rows(
                    tickets
                        .iter()
                        .map(|ticket| TicketRow::new(ticket, users))
                        .collect(),
                )
            }
        };
        Self { filter, state }
    }

    /// Active filter.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Selector options in display order.
    #[must_use]
    pub fn filter_options(&self) -> [FilterOption; 3] {
        StatusFilter::ALL.map(|filter| FilterOption {
            filter,
            selected: filter == self.filter,
        })
    }

    /// Table body.
    #[must_use]
    pub const fn state(&self) -> &TicketListState {
        &self.state
    }
}

impl fmt::Display for TicketListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status:")?;
        for option in self.filter_options() {
            if option.selected {
                write!(f, " [{}]", option.label())?;
            } else {
                write!(f, " {}", option.label())?;
            }
        }
        writeln!(f)?;

        match &self.state {
            TicketListState::Error => writeln!(f, "{}", Self::ERROR_MESSAGE),
            TicketListState::Empty => writeln!(f, "{}", Self::EMPTY_MESSAGE),
            TicketListState::Rows(rows) => {
                writeln!(f, "{:<6} {:<10} {:<12} Description", "ID", "Status", "Assignee")?;
                for row in rows {
                    writeln!(
                        f,
                        "{:<6} {:<10} {:<12} {}",
                        row.id, row.status, row.assignee, row.description
                    )?;
                }
                Ok(())
            }
        }
    }
}
