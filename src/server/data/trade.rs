use chrono::Utc;
use entity::sea_orm_active_enums::ProposalStatus;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

/// An MLE team changing hands in a trade, along with the team giving it up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTradeItem {
    pub from_team_id: i32,
    pub mle_team_id: i32,
}

pub struct TradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TradeRepository<'a, C> {
    /// Creates a new instance of [`TradeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending trade along with its items
    pub async fn create(
        &self,
        league_id: i32,
        proposer_team_id: i32,
        receiver_team_id: i32,
        message: Option<String>,
        items: &[NewTradeItem],
    ) -> Result<(entity::trade::Model, Vec<entity::trade_item::Model>), DbErr> {
        let now = Utc::now().naive_utc();

        let trade = entity::trade::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            proposer_team_id: ActiveValue::Set(proposer_team_id),
            receiver_team_id: ActiveValue::Set(receiver_team_id),
            status: ActiveValue::Set(ProposalStatus::Pending),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut trade_items = Vec::with_capacity(items.len());
        for item in items {
            let trade_item = entity::trade_item::ActiveModel {
                trade_id: ActiveValue::Set(trade.id),
                from_team_id: ActiveValue::Set(item.from_team_id),
                mle_team_id: ActiveValue::Set(item.mle_team_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            trade_items.push(trade_item);
        }

        Ok((trade, trade_items))
    }

    /// Whether the team proposed or received a trade that is still pending
    pub async fn has_pending_for_team(&self, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Trade::find()
            .filter(Self::involves(team_id))
            .filter(entity::trade::Column::Status.eq(ProposalStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes every trade the team is part of, items included
    pub async fn delete_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let trade_ids: Vec<i32> = entity::prelude::Trade::find()
            .select_only()
            .column(entity::trade::Column::Id)
            .filter(Self::involves(team_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.delete_with_items(trade_ids).await
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<u64, DbErr> {
        let trade_ids: Vec<i32> = entity::prelude::Trade::find()
            .select_only()
            .column(entity::trade::Column::Id)
            .filter(entity::trade::Column::LeagueId.eq(league_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.delete_with_items(trade_ids).await
    }

    async fn delete_with_items(&self, trade_ids: Vec<i32>) -> Result<u64, DbErr> {
        if trade_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::TradeItem::delete_many()
            .filter(entity::trade_item::Column::TradeId.is_in(trade_ids.clone()))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Trade::delete_many()
            .filter(entity::trade::Column::Id.is_in(trade_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn involves(team_id: i32) -> Condition {
        Condition::any()
            .add(entity::trade::Column::ProposerTeamId.eq(team_id))
            .add(entity::trade::Column::ReceiverTeamId.eq(team_id))
    }
}
