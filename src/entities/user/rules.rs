//! Uniqueness rules for users

use super::model::User;
use crate::core::error::ServiceError;
use crate::core::repository::Repository;
use crate::core::service::{UniquenessRule, conflict};
use async_trait::async_trait;

/// No two users may share an email, compared ignoring case
pub struct UniqueEmail;

#[async_trait]
impl UniquenessRule<User> for UniqueEmail {
    async fn check(
        &self,
        repository: &dyn Repository<User>,
        candidate: &User,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        let email = candidate.email.to_lowercase();
        let holders = repository
            .find_by(&|u: &User| u.email.to_lowercase() == email && Some(u.id) != exclude_id)
            .await?;

        if holders.is_empty() {
            Ok(())
        } else {
            Err(conflict::<User>(
                "email",
                format!("Email {} already exists", candidate.email),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_taken_email_conflicts_ignoring_case() {
        let repo = InMemoryRepository::with_seed(User::samples());
        let candidate = User::new(3, "A", "B", "FIRSTNAME01@lastname01.com", Utc::now());

        let err = UniqueEmail.check(&repo, &candidate, None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Email FIRSTNAME01@lastname01.com already exists"
        );
    }

    #[tokio::test]
    async fn test_own_email_is_allowed_on_update() {
        let repo = InMemoryRepository::with_seed(User::samples());
        let candidate = User::new(1, "A", "B", "firstName01@lastName01.com", Utc::now());
        assert!(UniqueEmail.check(&repo, &candidate, Some(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_fresh_email_passes() {
        let repo = InMemoryRepository::with_seed(User::samples());
        let candidate = User::new(3, "A", "B", "new@catalog.dev", Utc::now());
        assert!(UniqueEmail.check(&repo, &candidate, None).await.is_ok());
    }
}
