//! Trade proposals, waiver claims, free-agent pickups and the transaction log.
//!
//! Proposals and claims are recorded as `pending`; nothing here resolves them.

use entity::sea_orm_active_enums::{TransactionKind, WaiverSystem};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::transaction::{
        PickupDto, ProposeTradeDto, SubmitWaiverClaimDto, TradeDto, TradeItemDto,
        TransactionDto, WaiverClaimDto,
    },
    server::{
        data::{
            league::FantasyLeagueRepository,
            mle::MleTeamRepository,
            roster::RosterSlotRepository,
            season::SeasonSettingsRepository,
            team::FantasyTeamRepository,
            trade::{NewTradeItem, TradeRepository},
            transaction::{NewTransaction, TransactionRepository},
            waiver::{NewWaiverClaim, WaiverClaimRepository},
        },
        error::{
            auth::AuthError, league::LeagueError, roster::RosterError,
            transaction::TransactionError, Error,
        },
        service::roster::{
            ensure_draft_completed, ensure_unrostered, ensure_week_slots,
            place_in_first_empty_slot,
        },
    },
};

/// Validates a waiver bid against the league's waiver system and the team's budget.
///
/// Returns the bid to store, which is always `None` outside FAAB leagues.
pub fn validate_bid(
    waiver_system: WaiverSystem,
    faab_remaining: Option<i32>,
    bid_amount: Option<i32>,
) -> Result<Option<i32>, TransactionError> {
    if waiver_system != WaiverSystem::Faab {
        return Ok(None);
    }

    let Some(bid) = bid_amount else {
        return Err(TransactionError::BidRequired);
    };
    if bid < 0 {
        return Err(TransactionError::NegativeBid(bid));
    }

    let remaining = faab_remaining.unwrap_or(0);
    if bid > remaining {
        return Err(TransactionError::BidExceedsBudget { bid, remaining });
    }

    Ok(Some(bid))
}

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    /// Creates a new instance of [`TransactionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending trade between the user's team and another team of the league.
    ///
    /// Offered MLE teams must be on the proposer's current roster and requested ones on the
    /// receiver's. Proposals after the season's trade deadline week are rejected.
    pub async fn propose_trade(
        &self,
        league_id: i32,
        user_id: i32,
        proposal: ProposeTradeDto,
    ) -> Result<TradeDto, Error> {
        let txn = self.db.begin().await?;

        let (league, proposer) = self.get_league_and_team(&txn, league_id, user_id).await?;

        let receiver = match FantasyTeamRepository::new(&txn)
            .get(proposal.receiver_team_id)
            .await?
        {
            Some(team) if team.league_id == league.id => team,
            _ => return Err(LeagueError::TeamNotFound(proposal.receiver_team_id).into()),
        };
        if receiver.id == proposer.id {
            return Err(TransactionError::TradeWithSelf(proposer.id).into());
        }
        if proposal.offered_mle_team_ids.is_empty() && proposal.requested_mle_team_ids.is_empty() {
            return Err(TransactionError::EmptyTrade.into());
        }

        if let Some(settings) = SeasonSettingsRepository::new(&txn)
            .get_by_season(league.season)
            .await?
        {
            if league.current_week > settings.trade_deadline_week {
                return Err(TransactionError::TradeDeadlinePassed {
                    deadline: settings.trade_deadline_week,
                    week: league.current_week,
                }
                .into());
            }
        }

        let week = league.current_week;
        let mut items = Vec::new();
        for (team, mle_team_ids) in [
            (&proposer, &proposal.offered_mle_team_ids),
            (&receiver, &proposal.requested_mle_team_ids),
        ] {
            let slots = ensure_week_slots(&txn, &league, team.id, week).await?;
            for mle_team_id in mle_team_ids {
                if !slots.iter().any(|s| s.mle_team_id == Some(*mle_team_id)) {
                    return Err(TransactionError::NotOnRoster {
                        team_id: team.id,
                        mle_team_id: *mle_team_id,
                    }
                    .into());
                }
                items.push(NewTradeItem {
                    from_team_id: team.id,
                    mle_team_id: *mle_team_id,
                });
            }
        }

        let (trade, trade_items) = TradeRepository::new(&txn)
            .create(
                league.id,
                proposer.id,
                receiver.id,
                proposal.message,
                &items,
            )
            .await?;

        TransactionRepository::new(&txn)
            .create(NewTransaction {
                league_id: league.id,
                fantasy_team_id: proposer.id,
                kind: TransactionKind::Trade,
                mle_team_id: None,
                related_team_id: Some(receiver.id),
                week,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            league_id,
            trade_id = trade.id,
            proposer_team_id = proposer.id,
            receiver_team_id = receiver.id,
            "Trade proposed"
        );

        Ok(TradeDto {
            id: trade.id,
            league_id: trade.league_id,
            proposer_team_id: trade.proposer_team_id,
            receiver_team_id: trade.receiver_team_id,
            status: trade.status,
            message: trade.message,
            items: trade_items
                .into_iter()
                .map(|item| TradeItemDto {
                    from_team_id: item.from_team_id,
                    mle_team_id: item.mle_team_id,
                })
                .collect(),
            created_at: trade.created_at,
        })
    }

    /// Records a pending waiver claim for an unrostered MLE team.
    ///
    /// FAAB leagues require a bid within the team's remaining budget, other leagues snapshot
    /// the team's waiver priority.
    pub async fn submit_waiver_claim(
        &self,
        league_id: i32,
        user_id: i32,
        claim: SubmitWaiverClaimDto,
    ) -> Result<WaiverClaimDto, Error> {
        let txn = self.db.begin().await?;

        let (league, team) = self.get_league_and_team(&txn, league_id, user_id).await?;
        ensure_draft_completed(&league)?;
        let week = league.current_week;

        self.check_acquirable(&txn, league.id, week, claim.add_mle_team_id)
            .await?;
        if let Some(drop_mle_team_id) = claim.drop_mle_team_id {
            let slots = ensure_week_slots(&txn, &league, team.id, week).await?;
            if !slots.iter().any(|s| s.mle_team_id == Some(drop_mle_team_id)) {
                return Err(TransactionError::NotOnRoster {
                    team_id: team.id,
                    mle_team_id: drop_mle_team_id,
                }
                .into());
            }
        }

        let bid_amount = validate_bid(league.waiver_system, team.faab_remaining, claim.bid_amount)?;
        let priority = match league.waiver_system {
            WaiverSystem::Faab => None,
            WaiverSystem::Rolling | WaiverSystem::Fixed => team.waiver_priority,
        };

        let claim = WaiverClaimRepository::new(&txn)
            .create(NewWaiverClaim {
                league_id: league.id,
                fantasy_team_id: team.id,
                add_mle_team_id: claim.add_mle_team_id,
                drop_mle_team_id: claim.drop_mle_team_id,
                bid_amount,
                priority,
                week,
            })
            .await?;

        TransactionRepository::new(&txn)
            .create(NewTransaction {
                league_id: league.id,
                fantasy_team_id: team.id,
                kind: TransactionKind::Waiver,
                mle_team_id: Some(claim.add_mle_team_id),
                related_team_id: None,
                week,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            league_id,
            team_id = team.id,
            claim_id = claim.id,
            "Waiver claim submitted"
        );

        Ok(WaiverClaimDto::from(claim))
    }

    /// Adds an unrostered MLE team straight onto the user's roster, optionally dropping one
    pub async fn pickup(
        &self,
        league_id: i32,
        user_id: i32,
        pickup: PickupDto,
    ) -> Result<Vec<TransactionDto>, Error> {
        let txn = self.db.begin().await?;

        let (league, team) = self.get_league_and_team(&txn, league_id, user_id).await?;
        ensure_draft_completed(&league)?;
        let week = league.current_week;

        self.check_acquirable(&txn, league.id, week, pickup.add_mle_team_id)
            .await?;

        let transaction_repo = TransactionRepository::new(&txn);
        let mut logged = Vec::new();

        if let Some(drop_mle_team_id) = pickup.drop_mle_team_id {
            let slots = ensure_week_slots(&txn, &league, team.id, week).await?;
            let Some(slot) = slots
                .into_iter()
                .find(|s| s.mle_team_id == Some(drop_mle_team_id))
            else {
                return Err(TransactionError::NotOnRoster {
                    team_id: team.id,
                    mle_team_id: drop_mle_team_id,
                }
                .into());
            };
            if slot.is_locked {
                return Err(RosterError::SlotsLocked(vec![slot.id]).into());
            }

            RosterSlotRepository::new(&txn)
                .set_occupant(slot, None)
                .await?;
            logged.push(
                transaction_repo
                    .create(NewTransaction {
                        league_id: league.id,
                        fantasy_team_id: team.id,
                        kind: TransactionKind::Drop,
                        mle_team_id: Some(drop_mle_team_id),
                        related_team_id: None,
                        week,
                    })
                    .await?,
            );
        }

        place_in_first_empty_slot(&txn, &league, team.id, week, pickup.add_mle_team_id).await?;
        logged.push(
            transaction_repo
                .create(NewTransaction {
                    league_id: league.id,
                    fantasy_team_id: team.id,
                    kind: TransactionKind::Add,
                    mle_team_id: Some(pickup.add_mle_team_id),
                    related_team_id: None,
                    week,
                })
                .await?,
        );

        txn.commit().await?;

        tracing::info!(
            league_id,
            team_id = team.id,
            add_mle_team_id = pickup.add_mle_team_id,
            drop_mle_team_id = ?pickup.drop_mle_team_id,
            "Free agent picked up"
        );

        Ok(logged.into_iter().map(TransactionDto::from).collect())
    }

    /// Transaction log of a league, newest first
    pub async fn history(&self, league_id: i32) -> Result<Vec<TransactionDto>, Error> {
        if FantasyLeagueRepository::new(self.db)
            .get(league_id)
            .await?
            .is_none()
        {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        }

        let transactions = TransactionRepository::new(self.db)
            .get_by_league(league_id)
            .await?;

        Ok(transactions.into_iter().map(TransactionDto::from).collect())
    }

    async fn get_league_and_team<C: ConnectionTrait>(
        &self,
        db: &C,
        league_id: i32,
        user_id: i32,
    ) -> Result<(entity::fantasy_league::Model, entity::fantasy_team::Model), Error> {
        let Some(league) = FantasyLeagueRepository::new(db).get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };
        let Some(team) = FantasyTeamRepository::new(db)
            .find_by_owner(league.id, user_id)
            .await?
        else {
            return Err(AuthError::NotLeagueMember { user_id, league_id }.into());
        };

        Ok((league, team))
    }

    /// Fails unless the MLE team exists and nobody in the league rosters it for the week
    async fn check_acquirable<C: ConnectionTrait>(
        &self,
        db: &C,
        league_id: i32,
        week: i32,
        mle_team_id: i32,
    ) -> Result<(), Error> {
        if MleTeamRepository::new(db).get(mle_team_id).await?.is_none() {
            return Err(RosterError::MleTeamNotFound(mle_team_id).into());
        }

        match ensure_unrostered(db, league_id, week, mle_team_id).await {
            Err(Error::RosterError(RosterError::AlreadyRostered(id))) => {
                Err(TransactionError::AlreadyRostered(id).into())
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    mod validate_bid {
        use entity::sea_orm_active_enums::WaiverSystem;

        use crate::server::{
            error::transaction::TransactionError, service::transaction::validate_bid,
        };

        /// Expect FAAB claims without a bid to be rejected
        #[test]
        fn requires_bid_for_faab() {
            let result = validate_bid(WaiverSystem::Faab, Some(100), None);

            assert!(matches!(result, Err(TransactionError::BidRequired)));
        }

        /// Expect bids above the remaining budget to be rejected
        #[test]
        fn rejects_bid_over_budget() {
            let result = validate_bid(WaiverSystem::Faab, Some(20), Some(21));

            assert!(matches!(
                result,
                Err(TransactionError::BidExceedsBudget {
                    bid: 21,
                    remaining: 20
                })
            ));
        }

        /// Expect negative bids to be rejected
        #[test]
        fn rejects_negative_bid() {
            let result = validate_bid(WaiverSystem::Faab, Some(20), Some(-1));

            assert!(matches!(result, Err(TransactionError::NegativeBid(-1))));
        }

        /// Expect bids to be ignored outside FAAB leagues
        #[test]
        fn ignores_bid_for_rolling() {
            let result = validate_bid(WaiverSystem::Rolling, None, Some(50));

            assert!(matches!(result, Ok(None)));
        }
    }

    mod propose_trade {
        use entity::sea_orm_active_enums::RosterPosition;
        use fantasy_test_utils::prelude::*;

        use crate::{
            model::transaction::ProposeTradeDto,
            server::{
                error::{transaction::TransactionError, Error},
                service::transaction::TransactionService,
            },
        };

        /// Expect a trade of rostered MLE teams to be recorded as pending
        #[tokio::test]
        async fn records_pending_trade() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_teams = test.mle().insert_mle_teams(2).await?;
            test.roster()
                .insert_slot(members[0].1.id, 1, RosterPosition::Flex, 0, Some(mle_teams[0].id))
                .await?;
            test.roster()
                .insert_slot(members[1].1.id, 1, RosterPosition::Flex, 0, Some(mle_teams[1].id))
                .await?;

            let trade = TransactionService::new(&test.db)
                .propose_trade(
                    league.id,
                    members[0].0.id,
                    ProposeTradeDto {
                        receiver_team_id: members[1].1.id,
                        offered_mle_team_ids: vec![mle_teams[0].id],
                        requested_mle_team_ids: vec![mle_teams[1].id],
                        message: Some("Fair deal".to_string()),
                    },
                )
                .await
                .unwrap();

            assert_eq!(trade.items.len(), 2);
            assert_eq!(trade.items[0].from_team_id, members[0].1.id);
            assert_eq!(trade.items[1].from_team_id, members[1].1.id);

            Ok(())
        }

        /// Expect offering an MLE team the proposer does not hold to fail
        #[tokio::test]
        async fn fails_when_not_on_roster() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::default(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;

            let result = TransactionService::new(&test.db)
                .propose_trade(
                    league.id,
                    members[0].0.id,
                    ProposeTradeDto {
                        receiver_team_id: members[1].1.id,
                        offered_mle_team_ids: vec![mle_team.id],
                        requested_mle_team_ids: vec![],
                        message: None,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::TransactionError(TransactionError::NotOnRoster { .. }))
            ));

            Ok(())
        }

        /// Expect proposals after the trade deadline week to fail
        #[tokio::test]
        async fn fails_after_deadline() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(
                    LeagueFixture {
                        current_week: 7,
                        ..Default::default()
                    },
                    2,
                )
                .await?;
            test.mle().insert_season_settings(1, 7, 10, 6).await?;

            let result = TransactionService::new(&test.db)
                .propose_trade(
                    league.id,
                    members[0].0.id,
                    ProposeTradeDto {
                        receiver_team_id: members[1].1.id,
                        offered_mle_team_ids: vec![1],
                        requested_mle_team_ids: vec![],
                        message: None,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::TransactionError(
                    TransactionError::TradeDeadlinePassed { deadline: 6, week: 7 }
                ))
            ));

            Ok(())
        }
    }

    mod submit_waiver_claim {
        use fantasy_test_utils::prelude::*;
        use sea_orm::{ActiveValue, EntityTrait};

        use crate::{
            model::transaction::SubmitWaiverClaimDto,
            server::{
                error::{transaction::TransactionError, Error},
                service::transaction::TransactionService,
            },
        };

        /// Expect a FAAB claim within budget to be stored as pending
        #[tokio::test]
        async fn records_claim_with_bid() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let league = test.league().insert_league(LeagueFixture::completed()).await?;
            let user = test.user().insert_member("claimer").await?;
            let team = test.league().insert_team(league.id, user.id, "clm", Some(1)).await?;
            entity::prelude::FantasyTeam::update(entity::fantasy_team::ActiveModel {
                id: ActiveValue::Unchanged(team.id),
                faab_remaining: ActiveValue::Set(Some(50)),
                ..Default::default()
            })
            .exec(&test.db)
            .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;

            let claim = TransactionService::new(&test.db)
                .submit_waiver_claim(
                    league.id,
                    user.id,
                    SubmitWaiverClaimDto {
                        add_mle_team_id: mle_team.id,
                        drop_mle_team_id: None,
                        bid_amount: Some(30),
                    },
                )
                .await
                .unwrap();

            assert_eq!(claim.bid_amount, Some(30));
            assert_eq!(claim.priority, None);

            Ok(())
        }

        /// Expect a FAAB claim above the remaining budget to fail
        #[tokio::test]
        async fn fails_over_budget() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::completed(), 1)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;

            let result = TransactionService::new(&test.db)
                .submit_waiver_claim(
                    league.id,
                    members[0].0.id,
                    SubmitWaiverClaimDto {
                        add_mle_team_id: mle_team.id,
                        drop_mle_team_id: None,
                        bid_amount: Some(1),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::TransactionError(
                    TransactionError::BidExceedsBudget { .. }
                ))
            ));

            Ok(())
        }
    }

    mod pickup {
        use entity::sea_orm_active_enums::{RosterPosition, TransactionKind};
        use fantasy_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::{
            model::transaction::PickupDto,
            server::{
                error::{transaction::TransactionError, Error},
                service::transaction::TransactionService,
            },
        };

        /// Expect a drop then add to swap the MLE teams on the roster
        #[tokio::test]
        async fn drops_then_adds() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::completed(), 1)
                .await?;
            let mle_teams = test.mle().insert_mle_teams(2).await?;
            let slot = test
                .roster()
                .insert_slot(members[0].1.id, 1, RosterPosition::Doubles, 0, Some(mle_teams[0].id))
                .await?;

            let logged = TransactionService::new(&test.db)
                .pickup(
                    league.id,
                    members[0].0.id,
                    PickupDto {
                        add_mle_team_id: mle_teams[1].id,
                        drop_mle_team_id: Some(mle_teams[0].id),
                    },
                )
                .await
                .unwrap();

            let kinds: Vec<TransactionKind> = logged.iter().map(|t| t.kind).collect();
            assert_eq!(kinds, vec![TransactionKind::Drop, TransactionKind::Add]);

            let slot = entity::prelude::RosterSlot::find_by_id(slot.id)
                .one(&test.db)
                .await?
                .unwrap();
            assert_eq!(slot.mle_team_id, Some(mle_teams[1].id));

            Ok(())
        }

        /// Expect an MLE team rostered by another team to be rejected
        #[tokio::test]
        async fn fails_when_rostered_elsewhere() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let (league, members) = test
                .league()
                .insert_league_with_teams(LeagueFixture::completed(), 2)
                .await?;
            let mle_team = test.mle().insert_mle_team("Bulls").await?;
            test.roster()
                .insert_slot(members[1].1.id, 1, RosterPosition::Bench, 0, Some(mle_team.id))
                .await?;

            let result = TransactionService::new(&test.db)
                .pickup(
                    league.id,
                    members[0].0.id,
                    PickupDto {
                        add_mle_team_id: mle_team.id,
                        drop_mle_team_id: None,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::TransactionError(TransactionError::AlreadyRostered(_)))
            ));

            Ok(())
        }
    }
}
