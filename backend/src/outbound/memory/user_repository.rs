//! In-memory [`UserRepository`] adapter.

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Fixed user directory. Users are never added or removed after start-up,
/// so no lock is needed.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Build a directory holding `users` in the given order.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.iter().find(|user| user.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::memory::seed_users;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some("Alice"))]
    #[case(5, Some("Ed"))]
    #[case(6, None)]
    #[tokio::test]
    async fn find_by_id_resolves_seed_users(#[case] id: u64, #[case] expected: Option<&str>) {
        let repo = InMemoryUserRepository::new(seed_users().expect("seed users"));
        let found = repo.find_by_id(UserId::new(id)).await.expect("lookup");
        assert_eq!(found.as_ref().map(|u| u.name().as_str()), expected);
    }
}
