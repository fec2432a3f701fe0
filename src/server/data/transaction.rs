use chrono::Utc;
use entity::sea_orm_active_enums::TransactionKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct NewTransaction {
    pub league_id: i32,
    pub fantasy_team_id: i32,
    pub kind: TransactionKind,
    pub mle_team_id: Option<i32>,
    pub related_team_id: Option<i32>,
    pub week: i32,
}

/// Append-only log of roster moves; rows are only removed along with their league
pub struct TransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    /// Creates a new instance of [`TransactionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        transaction: NewTransaction,
    ) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            league_id: ActiveValue::Set(transaction.league_id),
            fantasy_team_id: ActiveValue::Set(transaction.fantasy_team_id),
            kind: ActiveValue::Set(transaction.kind),
            mle_team_id: ActiveValue::Set(transaction.mle_team_id),
            related_team_id: ActiveValue::Set(transaction.related_team_id),
            week: ActiveValue::Set(transaction.week),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// A league's transactions, newest first
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::transaction::Model>, DbErr> {
        entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::LeagueId.eq(league_id))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Transaction::delete_many()
            .filter(entity::transaction::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_by_league {
        use entity::sea_orm_active_enums::TransactionKind;
        use fantasy_test_utils::prelude::*;

        use crate::server::data::transaction::{NewTransaction, TransactionRepository};

        /// Expect the most recently logged transaction first
        #[tokio::test]
        async fn returns_newest_first() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 1)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;

            let repo = TransactionRepository::new(&test.db);
            for kind in [TransactionKind::Add, TransactionKind::Drop] {
                repo.create(NewTransaction {
                    league_id: league.id,
                    fantasy_team_id: members[0].1.id,
                    kind,
                    mle_team_id: Some(mle_team.id),
                    related_team_id: None,
                    week: 1,
                })
                .await?;
            }

            let history = repo.get_by_league(league.id).await?;
            let kinds: Vec<TransactionKind> = history.iter().map(|t| t.kind).collect();

            assert_eq!(kinds, vec![TransactionKind::Drop, TransactionKind::Add]);

            Ok(())
        }
    }
}
