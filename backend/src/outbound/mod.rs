//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: process-local ticket and user stores plus the seed data they
//!   start from.
//!
//! Adapters are thin translators with no business logic.

pub mod memory;
