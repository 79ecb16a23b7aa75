//! Seed data loaded at startup.

use crate::domain::{
    Ticket, TicketDescription, TicketId, TicketValidationError, User, UserId, UserName,
    UserValidationError,
};

const USERS: [(u64, &str); 5] = [(1, "Alice"), (2, "Bob"), (3, "Chris"), (4, "Daisy"), (5, "Ed")];

// (id, description, assignee, completed)
const TICKETS: [(u64, &str, Option<u64>, bool); 20] = [
    (1, "Install a monitor arm", Some(1), false),
    (2, "Move the desk to the new location", Some(1), false),
    (3, "Set up dual monitors", Some(2), false),
    (4, "Configure keyboard shortcuts", None, false),
    (5, "Install standing desk converter", Some(1), true),
    (6, "Replace office chair wheels", Some(2), false),
    (7, "Mount whiteboard on wall", None, false),
    (8, "Organize cable management", Some(1), true),
    (9, "Add task lighting to desk", Some(2), false),
    (10, "Install noise-canceling panels", None, false),
    (11, "Set up ergonomic mouse and pad", Some(1), false),
    (12, "Replace desk lamp bulb", Some(2), true),
    (13, "Install monitor privacy screen", None, false),
    (14, "Configure desk phone system", Some(1), false),
    (15, "Add plants to workspace", Some(2), false),
    (16, "Install under-desk power strip", None, true),
    (17, "Set up document organizer", Some(1), false),
    (18, "Replace office chair cushion", Some(2), false),
    (19, "Mount wall calendar", None, false),
    (20, "Install desk drawer organizers", Some(1), true),
];

/// The fixed user directory.
///
/// # Errors
/// Returns [`UserValidationError`] if a seeded name is blank.
pub fn seed_users() -> Result<Vec<User>, UserValidationError> {
    USERS
        .iter()
        .map(|&(id, name)| UserName::new(name).map(|name| User::new(UserId::new(id), name)))
        .collect()
}

/// The office-setup tickets the server starts with.
///
/// # Errors
/// Returns [`TicketValidationError`] if a seeded description is blank.
pub fn seed_tickets() -> Result<Vec<Ticket>, TicketValidationError> {
    TICKETS
        .iter()
        .map(|&(id, description, assignee, completed)| {
            TicketDescription::new(description).map(|description| {
                Ticket::from_parts(
                    TicketId::new(id),
                    description,
                    assignee.map(UserId::new),
                    completed,
                )
            })
        })
        .collect()
}
