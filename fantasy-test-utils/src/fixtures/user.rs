use chrono::Utc;
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        username: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_status(username, role, UserStatus::Active)
            .await
    }

    pub async fn insert_user_with_status(
        &self,
        username: &str,
        role: UserRole,
        status: UserStatus,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                role: ActiveValue::Set(role),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_admin(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(username, UserRole::Admin).await
    }

    pub async fn insert_member(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(username, UserRole::User).await
    }

    pub async fn insert_suspended_member(
        &self,
        username: &str,
    ) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_status(username, UserRole::User, UserStatus::Suspended)
            .await
    }
}
