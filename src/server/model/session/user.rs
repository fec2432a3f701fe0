use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key the login flow stores the authenticated user's ID under
pub const SESSION_USER_ID_KEY: &str = "fantasy:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session user id: {}", e))
                })
            })
            .transpose()
    }

    /// Clear the session if it holds a user ID.
    ///
    /// Returns whether a user was logged out. Sessions without data are left untouched as
    /// clearing an empty session fails against the store.
    pub async fn clear(session: &Session) -> Result<bool, Error> {
        if Self::get(session).await?.is_none() {
            return Ok(false);
        }

        session.clear().await;

        Ok(true)
    }
}
