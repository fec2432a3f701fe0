use chrono::Utc;
use entity::sea_orm_active_enums::UserStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Sets the user's status, returning `None` if the user does not exist
    pub async fn update_status(
        &self,
        user_id: i32,
        status: UserStatus,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.status = ActiveValue::Set(status);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }
}
