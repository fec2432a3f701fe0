use chrono::Utc;
use entity::sea_orm_active_enums::ProposalStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct NewWaiverClaim {
    pub league_id: i32,
    pub fantasy_team_id: i32,
    pub add_mle_team_id: i32,
    pub drop_mle_team_id: Option<i32>,
    pub bid_amount: Option<i32>,
    pub priority: Option<i32>,
    pub week: i32,
}

pub struct WaiverClaimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaiverClaimRepository<'a, C> {
    /// Creates a new instance of [`WaiverClaimRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending claim
    pub async fn create(
        &self,
        claim: NewWaiverClaim,
    ) -> Result<entity::waiver_claim::Model, DbErr> {
        entity::waiver_claim::ActiveModel {
            league_id: ActiveValue::Set(claim.league_id),
            fantasy_team_id: ActiveValue::Set(claim.fantasy_team_id),
            add_mle_team_id: ActiveValue::Set(claim.add_mle_team_id),
            drop_mle_team_id: ActiveValue::Set(claim.drop_mle_team_id),
            bid_amount: ActiveValue::Set(claim.bid_amount),
            priority: ActiveValue::Set(claim.priority),
            week: ActiveValue::Set(claim.week),
            status: ActiveValue::Set(ProposalStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            processed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn has_pending_for_team(&self, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::WaiverClaim::find()
            .filter(entity::waiver_claim::Column::FantasyTeamId.eq(team_id))
            .filter(entity::waiver_claim::Column::Status.eq(ProposalStatus::Pending))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete_by_team(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WaiverClaim::delete_many()
            .filter(entity::waiver_claim::Column::FantasyTeamId.eq(team_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WaiverClaim::delete_many()
            .filter(entity::waiver_claim::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod has_pending_for_team {
        use fantasy_test_utils::prelude::*;

        use crate::server::data::waiver::{NewWaiverClaim, WaiverClaimRepository};

        /// Expect only the claiming team to report a pending claim
        #[tokio::test]
        async fn reports_claiming_team_only() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;

            let repo = WaiverClaimRepository::new(&test.db);
            repo.create(NewWaiverClaim {
                league_id: league.id,
                fantasy_team_id: members[0].1.id,
                add_mle_team_id: mle_team.id,
                drop_mle_team_id: None,
                bid_amount: Some(10),
                priority: None,
                week: 1,
            })
            .await?;

            assert!(repo.has_pending_for_team(members[0].1.id).await?);
            assert!(!repo.has_pending_for_team(members[1].1.id).await?);

            Ok(())
        }
    }
}
