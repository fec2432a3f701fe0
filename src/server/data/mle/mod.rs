//! Repositories for MLE reference data: teams, players and their statistics.

pub mod player;
pub mod stats;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct MleTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MleTeamRepository<'a, C> {
    /// Creates a new instance of [`MleTeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every MLE team ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::mle_team::Model>, DbErr> {
        entity::prelude::MleTeam::find()
            .order_by_asc(entity::mle_team::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get(&self, mle_team_id: i32) -> Result<Option<entity::mle_team::Model>, DbErr> {
        entity::prelude::MleTeam::find_by_id(mle_team_id)
            .one(self.db)
            .await
    }

    /// Players currently on the MLE team
    pub async fn get_players(
        &self,
        mle_team_id: i32,
    ) -> Result<Vec<entity::mle_player::Model>, DbErr> {
        entity::prelude::MlePlayer::find()
            .filter(entity::mle_player::Column::MleTeamId.eq(mle_team_id))
            .order_by_asc(entity::mle_player::Column::Name)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_players {
        use fantasy_test_utils::prelude::*;

        use crate::server::data::mle::MleTeamRepository;

        /// Expect only players of the requested team, ordered by name
        #[tokio::test]
        async fn returns_team_players_by_name() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let bulls = test.mle().insert_mle_team("Bulls").await?;
            let hawks = test.mle().insert_mle_team("Hawks").await?;
            test.mle().insert_mle_player(Some(bulls.id), "Zephyr").await?;
            test.mle().insert_mle_player(Some(bulls.id), "Apex").await?;
            test.mle().insert_mle_player(Some(hawks.id), "Comet").await?;
            test.mle().insert_mle_player(None, "Free Agent").await?;

            let players = MleTeamRepository::new(&test.db).get_players(bulls.id).await?;
            let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();

            assert_eq!(names, vec!["Apex", "Zephyr"]);

            Ok(())
        }
    }
}
