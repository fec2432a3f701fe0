//! Declarative test builder.
//!
//! The builder queues table creation and fixture records, all of which are executed
//! during the final `build()` call.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::fantasy_tables, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_fantasy_tables: bool,

    users: Vec<(String, UserRole)>,
    mle_teams: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_fantasy_tables: false,
            users: Vec::new(),
            mle_teams: Vec::new(),
        }
    }

    /// Create every table of the fantasy schema.
    pub fn with_fantasy_tables(mut self) -> Self {
        self.include_fantasy_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Useful for tests asserting behaviour when related tables are missing.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided username & role during `build()`.
    pub fn with_user(mut self, username: impl Into<String>, role: UserRole) -> Self {
        self.users.push((username.into(), role));
        self
    }

    /// Insert an MLE team with the provided name during `build()`.
    pub fn with_mle_team(mut self, name: impl Into<String>) -> Self {
        self.mle_teams.push(name.into());
        self
    }

    /// Build the test context, creating tables first and fixtures second.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_fantasy_tables {
            all_tables.extend(fantasy_tables());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (username, role) in self.users {
            setup.user().insert_user(&username, role).await?;
        }

        for name in self.mle_teams {
            setup.mle().insert_mle_team(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_fantasy_tables() {
        let result = TestBuilder::new().with_fantasy_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_inserts_fixtures() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_fantasy_tables()
            .with_user("admin", UserRole::Admin)
            .with_mle_team("Bulls")
            .build()
            .await?;

        let users = entity::prelude::User::find().all(&test.db).await?;
        let mle_teams = entity::prelude::MleTeam::find().all(&test.db).await?;
        assert_eq!(users.len(), 1);
        assert_eq!(mle_teams.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn builder_fails_for_fixture_without_tables() {
        let result = TestBuilder::new().with_user("admin", UserRole::Admin).build().await;
        assert!(result.is_err());
    }
}
