//! `ticketctl` argument parsing and command execution.
//!
//! The binary only installs logging and a Ctrl-C handler; everything else
//! lives here so commands can be driven against any [`TicketsApi`] and any
//! [`Write`] sink in tests.

use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use thiserror::Error;
use ticket_models::{StatusFilter, TicketId, UserId};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::{RestTicketsApi, TicketsApi};
use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};
use crate::query::Queries;
use crate::views::{
    AssigneeChange, NewTicketForm, NewTicketFormError, StatusChange, TicketDetailsView,
    TicketListView, TicketStatus,
};

/// API root used when neither `--base-url` nor `TICKETS_API_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3333/api";

/// `ticketctl` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ticketctl",
    about = "Inspect and update tickets on a tickets server",
    version
)]
pub struct Cli {
    /// API root, including the `/api` path.
    #[arg(
        long = "base-url",
        env = "TICKETS_API_URL",
        value_name = "url",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,
    /// Whole-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "seconds")]
    pub timeout_secs: Option<u64>,
    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List tickets.
    List {
        /// `all`, `open` or `completed`.
        #[arg(long, value_name = "status", default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },
    /// Show one ticket.
    Show {
        /// Ticket id.
        id: TicketId,
    },
    /// Create a ticket.
    Create {
        /// Work description.
        description: String,
        /// User to assign after creation.
        #[arg(long, value_name = "user-id")]
        assignee: Option<UserId>,
    },
    /// Assign a ticket to a user.
    Assign {
        /// Ticket id.
        id: TicketId,
        /// User id.
        user: UserId,
    },
    /// Clear a ticket's assignee.
    Unassign {
        /// Ticket id.
        id: TicketId,
    },
    /// Mark a ticket completed.
    Complete {
        /// Ticket id.
        id: TicketId,
    },
    /// Reopen a completed ticket.
    Reopen {
        /// Ticket id.
        id: TicketId,
    },
    /// List users.
    Users,
}

/// Failure of a `ticketctl` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
    /// New-ticket input was rejected before any call.
    #[error(transparent)]
    Form(#[from] NewTicketFormError),
    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Cli {
    /// Optional request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Connect to the configured server and run `cli.command`.
///
/// Every request carries `cancel`; firing it abandons the in-flight call.
///
/// # Errors
/// See [`CliError`].
pub async fn run(
    cli: &Cli,
    out: &mut impl Write,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let http = HttpClient::new(&cli.base_url, cli.timeout())?;
    let queries = Queries::new(RestTicketsApi::new(http));
    execute(&queries, &cli.command, &RequestOptions::cancellable(cancel), out).await
}

/// Run `command` through `queries`, writing human-readable output to `out`.
///
/// # Errors
/// See [`CliError`].
pub async fn execute<A: TicketsApi>(
    queries: &Queries<A>,
    command: &Command,
    options: &RequestOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    debug!(?command, "running command");
    match command {
        Command::List { status } => list(queries, *status, options, out).await,
        Command::Show { id } => {
            let view = details(queries, *id, options).await?;
            write!(out, "{view}")?;
            Ok(())
        }
        Command::Create {
            description,
            assignee,
        } => {
            let request = NewTicketForm::new(description.as_str(), *assignee).validate()?;
            let ticket = queries.create_ticket(&request, options).await?;
            writeln!(out, "Created ticket #{}", ticket.id())?;
            Ok(())
        }
        Command::Assign { id, user } => {
            change_assignee(queries, *id, Some(*user), options, out).await
        }
        Command::Unassign { id } => change_assignee(queries, *id, None, options, out).await,
        Command::Complete { id } => {
            change_status(queries, *id, TicketStatus::Completed, options, out).await
        }
        Command::Reopen { id } => {
            change_status(queries, *id, TicketStatus::Open, options, out).await
        }
        Command::Users => {
            for user in queries.users(options).await? {
                writeln!(out, "{:<4} {}", user.id(), user.name())?;
            }
            Ok(())
        }
    }
}

async fn list<A: TicketsApi>(
    queries: &Queries<A>,
    filter: StatusFilter,
    options: &RequestOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let tickets = queries.tickets(filter, options).await;
    if matches!(&tickets, Err(error) if error.is_cancelled()) {
        return Err(ClientError::Cancelled.into());
    }
    let users = queries.users(options).await;

    let view = TicketListView::new(filter, tickets.as_deref(), users.as_deref());
    write!(out, "{view}")?;
    tickets.map(drop).map_err(CliError::from)
}

async fn details<A: TicketsApi>(
    queries: &Queries<A>,
    id: TicketId,
    options: &RequestOptions,
) -> Result<TicketDetailsView, ClientError> {
    let ticket = queries.ticket(id, options).await?;
    let users = match queries.users(options).await {
        Ok(users) => Some(users),
        Err(error) if error.is_cancelled() => return Err(error),
        Err(_) => None,
    };
    Ok(TicketDetailsView::new(&ticket, users.as_deref()))
}

async fn change_assignee<A: TicketsApi>(
    queries: &Queries<A>,
    id: TicketId,
    user: Option<UserId>,
    options: &RequestOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let view = details(queries, id, options).await?;
    let change = view.select_assignee(user);
    let Some(target) = change.target() else {
        writeln!(out, "{} unchanged", view.heading())?;
        return Ok(());
    };
    queries.change_assignee(id, target, options).await?;
    match change {
        AssigneeChange::Assign(assignee) => {
            writeln!(out, "Assigned ticket #{id} to user {assignee}")?;
        }
        AssigneeChange::Unassign | AssigneeChange::Unchanged => {
            writeln!(out, "Unassigned ticket #{id}")?;
        }
    }
    Ok(())
}

async fn change_status<A: TicketsApi>(
    queries: &Queries<A>,
    id: TicketId,
    status: TicketStatus,
    options: &RequestOptions,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let view = details(queries, id, options).await?;
    let change = view.select_status(status);
    let Some(completed) = change.target() else {
        writeln!(out, "{} is already {}", view.heading(), status.value())?;
        return Ok(());
    };
    queries.set_completed(id, completed, options).await?;
    let verb = match change {
        StatusChange::Complete => "Completed",
        StatusChange::Reopen | StatusChange::Unchanged => "Reopened",
    };
    writeln!(out, "{verb} ticket #{id}")?;
    Ok(())
}
