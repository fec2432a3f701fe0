use entity::sea_orm_active_enums::UserStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{league::LeagueError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user, `None` if no user has the ID
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Activates or suspends a user
    pub async fn set_status(&self, user_id: i32, status: UserStatus) -> Result<UserDto, Error> {
        let Some(user) = UserRepository::new(self.db)
            .update_status(user_id, status)
            .await?
        else {
            return Err(LeagueError::UserNotFound(user_id).into());
        };

        tracing::info!(user_id, status = ?user.status, "Updated user status");

        Ok(UserDto::from(user))
    }
}

#[cfg(test)]
mod tests {
    mod get_user {
        use fantasy_test_utils::prelude::*;

        use crate::server::service::user::UserService;

        /// Expect None for an ID with no user
        #[tokio::test]
        async fn returns_none_for_missing_user() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;

            let user = UserService::new(&test.db).get_user(1).await.unwrap();

            assert!(user.is_none());

            Ok(())
        }
    }

    mod set_status {
        use entity::sea_orm_active_enums::UserStatus;
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            error::{league::LeagueError, Error},
            service::user::UserService,
        };

        /// Expect a member to be suspended
        #[tokio::test]
        async fn suspends_user() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let user = test.user().insert_member("member").await?;

            let updated = UserService::new(&test.db)
                .set_status(user.id, UserStatus::Suspended)
                .await
                .unwrap();

            assert_eq!(updated.status, UserStatus::Suspended);

            Ok(())
        }

        /// Expect an unknown user to return not found
        #[tokio::test]
        async fn fails_for_missing_user() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;

            let result = UserService::new(&test.db)
                .set_status(9, UserStatus::Active)
                .await;

            assert!(matches!(
                result,
                Err(Error::LeagueError(LeagueError::UserNotFound(9)))
            ));

            Ok(())
        }
    }
}
