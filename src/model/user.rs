use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{UserRole, UserStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[schema(value_type = String, example = "user")]
    pub role: UserRole,
    #[schema(value_type = String, example = "active")]
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserStatusDto {
    #[schema(value_type = String, example = "suspended")]
    pub status: UserStatus,
}
