use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{team::FantasyTeamRepository, user::UserRepository},
    error::{auth::AuthError, league::LeagueError, Error},
    model::session::user::SessionUserId,
};

/// Level of access an endpoint requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any logged in user, suspended or not
    Member,
    /// A logged in user whose account is not suspended
    ActiveMember,
    /// A user with the admin role
    Admin,
    /// A user with the admin role whose account is not suspended
    ActiveAdmin,
}

impl Permission {
    fn requires_active(self) -> bool {
        matches!(self, Self::ActiveMember | Self::ActiveAdmin)
    }

    fn requires_admin(self) -> bool {
        matches!(self, Self::Admin | Self::ActiveAdmin)
    }
}

/// Checks a resolved user against a permission.
///
/// Suspension is checked before the role, so a suspended admin is refused the active
/// permissions like any other suspended account.
pub fn authorize(user: &entity::user::Model, permission: Permission) -> Result<(), AuthError> {
    if permission.requires_active() && user.status == UserStatus::Suspended {
        return Err(AuthError::UserSuspended(user.id));
    }

    if permission.requires_admin() && user.role != UserRole::Admin {
        return Err(AuthError::AdminRequired(user.id));
    }

    Ok(())
}

/// Resolves the session user and checks what they may access
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the session user if they hold the permission.
    ///
    /// # Returns
    /// - `Ok(user)`: User found and permitted
    /// - `Err(AuthError::UserNotInSession)`: No user ID in session
    /// - `Err(AuthError::UserNotInDatabase)`: User ID in session has no user, session is cleared
    /// - `Err(AuthError::AdminRequired | AuthError::UserSuspended)`: User lacks the permission
    pub async fn require(&self, permission: Permission) -> Result<entity::user::Model, Error> {
        let Some(user_id) = SessionUserId::get(self.session).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).get(user_id).await? else {
            SessionUserId::clear(self.session).await?;

            tracing::debug!(
                "Session cleared for user ID {} with active session but was not found in database",
                user_id
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        authorize(&user, permission)?;

        Ok(user)
    }

    /// Returns the session user if they own a team in the league or are an admin
    pub async fn require_league_member(
        &self,
        permission: Permission,
        league_id: i32,
    ) -> Result<entity::user::Model, Error> {
        let user = self.require(permission).await?;
        if user.role == UserRole::Admin {
            return Ok(user);
        }

        if FantasyTeamRepository::new(self.db)
            .find_by_owner(league_id, user.id)
            .await?
            .is_none()
        {
            return Err(AuthError::NotLeagueMember {
                user_id: user.id,
                league_id,
            }
            .into());
        }

        Ok(user)
    }

    /// Returns the session user if they own the team or are an admin
    pub async fn require_team_owner(
        &self,
        permission: Permission,
        team_id: i32,
    ) -> Result<entity::user::Model, Error> {
        let user = self.require(permission).await?;

        let Some(team) = FantasyTeamRepository::new(self.db).get(team_id).await? else {
            return Err(LeagueError::TeamNotFound(team_id).into());
        };

        if user.role != UserRole::Admin && team.owner_id != user.id {
            return Err(AuthError::NotTeamOwner {
                user_id: user.id,
                team_id,
            }
            .into());
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    mod authorize {
        use entity::sea_orm_active_enums::{UserRole, UserStatus};
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            controller::util::auth::{authorize, Permission},
            error::auth::AuthError,
        };

        /// Expect an active admin to pass every permission
        #[test]
        fn active_admin_passes_everything() {
            let admin = factory::mock_user_model(1, UserRole::Admin, UserStatus::Active);

            for permission in [
                Permission::Member,
                Permission::ActiveMember,
                Permission::Admin,
                Permission::ActiveAdmin,
            ] {
                assert!(authorize(&admin, permission).is_ok());
            }
        }

        /// Expect a suspended admin to keep admin access but be refused active permissions
        #[test]
        fn suspended_admin_is_limited() {
            let admin = factory::mock_user_model(4, UserRole::Admin, UserStatus::Suspended);

            assert!(authorize(&admin, Permission::Member).is_ok());
            assert!(authorize(&admin, Permission::Admin).is_ok());
            assert!(matches!(
                authorize(&admin, Permission::ActiveMember),
                Err(AuthError::UserSuspended(4))
            ));
            assert!(matches!(
                authorize(&admin, Permission::ActiveAdmin),
                Err(AuthError::UserSuspended(4))
            ));
        }

        /// Expect a member to be refused admin permission
        #[test]
        fn member_needs_admin_role() {
            let user = factory::mock_user_model(2, UserRole::User, UserStatus::Active);

            assert!(authorize(&user, Permission::ActiveMember).is_ok());
            assert!(matches!(
                authorize(&user, Permission::Admin),
                Err(AuthError::AdminRequired(2))
            ));
            assert!(matches!(
                authorize(&user, Permission::ActiveAdmin),
                Err(AuthError::AdminRequired(2))
            ));
        }

        /// Expect suspended members to keep member access but lose active member access
        #[test]
        fn suspended_member_is_limited() {
            let user = factory::mock_user_model(3, UserRole::User, UserStatus::Suspended);

            assert!(authorize(&user, Permission::Member).is_ok());
            assert!(matches!(
                authorize(&user, Permission::ActiveMember),
                Err(AuthError::UserSuspended(3))
            ));
        }
    }

    mod require {
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            controller::util::auth::{AuthGuard, Permission},
            error::{auth::AuthError, Error},
            model::session::user::SessionUserId,
        };

        /// Expect an empty session to be unauthorized
        #[tokio::test]
        async fn fails_without_session_user() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;

            let result = AuthGuard::new(&test.db, &test.session)
                .require(Permission::Member)
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotInSession))
            ));

            Ok(())
        }

        /// Expect a session user missing from the database to be cleared from the session
        #[tokio::test]
        async fn clears_session_for_missing_user() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            SessionUserId::insert(&test.session, 42).await.unwrap();

            let result = AuthGuard::new(&test.db, &test.session)
                .require(Permission::Member)
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotInDatabase(42)))
            ));
            assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

            Ok(())
        }
    }

    mod require_team_owner {
        use fantasy_test_utils::prelude::*;

        use crate::server::{
            controller::util::auth::{AuthGuard, Permission},
            error::{auth::AuthError, Error},
            model::session::user::SessionUserId,
        };

        /// Expect a member to be refused another member's team
        #[tokio::test]
        async fn rejects_other_owner() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (_, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            SessionUserId::insert(&test.session, members[0].0.id)
                .await
                .unwrap();

            let result = AuthGuard::new(&test.db, &test.session)
                .require_team_owner(Permission::Member, members[1].1.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::NotTeamOwner { .. }))
            ));

            Ok(())
        }

        /// Expect admins to manage any team
        #[tokio::test]
        async fn allows_admin() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (_, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 1)
                .await?;
            let admin = test.user().insert_admin("admin").await?;
            SessionUserId::insert(&test.session, admin.id).await.unwrap();

            let result = AuthGuard::new(&test.db, &test.session)
                .require_team_owner(Permission::Member, members[0].1.id)
                .await;

            assert!(result.is_ok());

            Ok(())
        }
    }
}
