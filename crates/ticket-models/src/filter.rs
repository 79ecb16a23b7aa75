//! Completion filter for ticket lists.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Ticket;

/// Error returned when parsing an unknown [`StatusFilter`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status filter `{0}`; expected all, open or completed")]
pub struct StatusFilterParseError(String);

/// Which tickets a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every ticket.
    #[default]
    All,
    /// Tickets with `completed == false`.
    Open,
    /// Tickets with `completed == true`.
    Completed,
}

impl StatusFilter {
    /// Options in the order they are offered to users.
    pub const ALL: [Self; 3] = [Self::All, Self::Open, Self::Completed];

    /// Map an optional completion flag onto a filter; `None` selects all.
    #[must_use]
    pub const fn from_completed(completed: Option<bool>) -> Self {
        match completed {
            None => Self::All,
            Some(false) => Self::Open,
            Some(true) => Self::Completed,
        }
    }

    /// Completion flag this filter selects, or `None` for all tickets.
    #[must_use]
    pub const fn completed(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Open => Some(false),
            Self::Completed => Some(true),
        }
    }

    /// Whether `ticket` passes the filter.
    #[must_use]
    pub const fn matches(self, ticket: &Ticket) -> bool {
        match self.completed() {
            None => true,
            Some(completed) => ticket.is_completed() == completed,
        }
    }

    /// Keep the matching tickets, preserving their order.
    #[must_use]
    pub fn apply(self, mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.retain(|ticket| self.matches(ticket));
        tickets
    }

    /// Label shown in the filter selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Open => "Open",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = StatusFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            _ => Err(StatusFilterParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TicketDescription, TicketId, UserId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn tickets() -> Vec<Ticket> {
        [(1, false), (2, true), (3, false), (4, true), (5, false)]
            .into_iter()
            .map(|(id, completed)| {
                Ticket::from_parts(
                    TicketId::new(id),
                    TicketDescription::new(format!("ticket {id}")).expect("valid description"),
                    Some(UserId::new(1)),
                    completed,
                )
            })
            .collect()
    }

    fn ids(tickets: &[Ticket]) -> Vec<u64> {
        tickets.iter().map(|t| t.id().get()).collect()
    }

    #[rstest]
    #[case(StatusFilter::All, vec![1, 2, 3, 4, 5])]
    #[case(StatusFilter::Open, vec![1, 3, 5])]
    #[case(StatusFilter::Completed, vec![2, 4])]
    fn apply_keeps_exact_subset_in_order(
        tickets: Vec<Ticket>,
        #[case] filter: StatusFilter,
        #[case] expected: Vec<u64>,
    ) {
        assert_eq!(ids(&filter.apply(tickets)), expected);
    }

    #[rstest]
    #[case(None, StatusFilter::All)]
    #[case(Some(false), StatusFilter::Open)]
    #[case(Some(true), StatusFilter::Completed)]
    fn completed_flag_round_trips(#[case] flag: Option<bool>, #[case] filter: StatusFilter) {
        assert_eq!(StatusFilter::from_completed(flag), filter);
        assert_eq!(filter.completed(), flag);
    }

    #[rstest]
    #[case("all", StatusFilter::All)]
    #[case("Open", StatusFilter::Open)]
    #[case(" COMPLETED ", StatusFilter::Completed)]
    fn parses_case_insensitively(#[case] raw: &str, #[case] expected: StatusFilter) {
        assert_eq!(raw.parse::<StatusFilter>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_names() {
        let err = "done".parse::<StatusFilter>().expect_err("unknown filter");
        assert!(err.to_string().contains("done"));
    }

    #[rstest]
    fn labels_follow_option_order() {
        let labels: Vec<_> = StatusFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Open", "Completed"]);
    }
}
