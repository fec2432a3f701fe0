use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct MlePlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MlePlayerRepository<'a, C> {
    /// Creates a new instance of [`MlePlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, player_id: i32) -> Result<Option<entity::mle_player::Model>, DbErr> {
        entity::prelude::MlePlayer::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Historical stats of a player, oldest week first
    pub async fn get_stats(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::player_historical_stats::Model>, DbErr> {
        entity::prelude::PlayerHistoricalStats::find()
            .filter(entity::player_historical_stats::Column::MlePlayerId.eq(player_id))
            .order_by_asc(entity::player_historical_stats::Column::Season)
            .order_by_asc(entity::player_historical_stats::Column::Week)
            .all(self.db)
            .await
    }
}
