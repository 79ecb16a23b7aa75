//! Composite cache keys.
//!
//! A key is `domain / operation / params`, for example
//! `tickets / ticket-list / {completed: false}`. Keys with different
//! parameters never share a cache slot; a [`QueryPrefix`] selects every key
//! under a domain, or under one operation of a domain, for invalidation.

use std::fmt;

use ticket_models::{StatusFilter, TicketId, UserId};

/// Top-level key segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryDomain {
    /// Ticket reads; invalidated by every mutation.
    Tickets,
    /// User directory reads.
    Users,
}

impl QueryDomain {
    /// Segment text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::Users => "users",
        }
    }
}

/// Second key segment naming the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    /// All tickets, optionally filtered by completion.
    TicketList,
    /// One ticket.
    TicketDetails,
    /// All users.
    UserList,
    /// One user.
    UserDetails,
}

impl QueryOperation {
    /// Segment text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TicketList => "ticket-list",
            Self::TicketDetails => "ticket-details",
            Self::UserList => "user-list",
            Self::UserDetails => "user-details",
        }
    }

    /// Domain the operation belongs to.
    #[must_use]
    pub const fn domain(self) -> QueryDomain {
        match self {
            Self::TicketList | Self::TicketDetails => QueryDomain::Tickets,
            Self::UserList | Self::UserDetails => QueryDomain::Users,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum QueryParams {
    None,
    Completed(Option<bool>),
    Id(u64),
}

/// Cache key for one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    operation: QueryOperation,
    params: QueryParams,
}

impl QueryKey {
    /// Ticket list under `filter`.
    #[must_use]
    pub const fn ticket_list(filter: StatusFilter) -> Self {
        Self {
            operation: QueryOperation::TicketList,
            params: QueryParams::Completed(filter.completed()),
        }
    }

    /// Ticket details for `id`.
    #[must_use]
    pub const fn ticket_details(id: TicketId) -> Self {
        Self {
            operation: QueryOperation::TicketDetails,
            params: QueryParams::Id(id.get()),
        }
    }

    /// The user directory.
    #[must_use]
    pub const fn user_list() -> Self {
        Self {
            operation: QueryOperation::UserList,
            params: QueryParams::None,
        }
    }

    /// User details for `id`.
    #[must_use]
    pub const fn user_details(id: UserId) -> Self {
        Self {
            operation: QueryOperation::UserDetails,
            params: QueryParams::Id(id.get()),
        }
    }

    /// First segment.
    #[must_use]
    pub const fn domain(&self) -> QueryDomain {
        self.operation.domain()
    }

    /// Second segment.
    #[must_use]
    pub const fn operation(&self) -> QueryOperation {
        self.operation
    }

    /// Whether this key lies under `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &QueryPrefix) -> bool {
        self.domain() == prefix.domain
            && prefix.operation.is_none_or(|operation| operation == self.operation)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain().as_str(), self.operation.as_str())?;
        match self.params {
            QueryParams::None => Ok(()),
            QueryParams::Completed(None) => write!(f, "?completed=any"),
            QueryParams::Completed(Some(completed)) => write!(f, "?completed={completed}"),
            QueryParams::Id(id) => write!(f, "?id={id}"),
        }
    }
}

/// Leading segments used to select keys for invalidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPrefix {
    domain: QueryDomain,
    operation: Option<QueryOperation>,
}

impl QueryPrefix {
    /// Every ticket read.
    pub const TICKETS: Self = Self::domain(QueryDomain::Tickets);
    /// Every user read.
    pub const USERS: Self = Self::domain(QueryDomain::Users);

    /// Every key under `domain`.
    #[must_use]
    pub const fn domain(domain: QueryDomain) -> Self {
        Self {
            domain,
            operation: None,
        }
    }

    /// Every key for `operation`, whatever its parameters.
    #[must_use]
    pub const fn operation(operation: QueryOperation) -> Self {
        Self {
            domain: operation.domain(),
            operation: Some(operation),
        }
    }

    /// Domain selected by the prefix.
    #[must_use]
    pub const fn query_domain(&self) -> QueryDomain {
        self.domain
    }
}
