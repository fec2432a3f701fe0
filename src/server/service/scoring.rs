use std::collections::HashMap;

use entity::sea_orm_active_enums::RosterPosition;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::league::MatchupDto,
    server::{
        data::{
            league::FantasyLeagueRepository, matchup::MatchupRepository,
            mle::stats::MleTeamWeeklyStatsRepository, roster::RosterSlotRepository,
            team::FantasyTeamRepository,
        },
        error::{league::LeagueError, Error},
        service::roster::ensure_week_slots,
    },
};

/// Sums the fantasy points of the MLE teams in a team's non-bench slots.
///
/// MLE teams without stats for the week contribute nothing.
pub fn team_score(slots: &[entity::roster_slot::Model], points: &HashMap<i32, f64>) -> f64 {
    slots
        .iter()
        .filter(|s| s.position != RosterPosition::Bench)
        .filter_map(|s| s.mle_team_id)
        .map(|id| points.get(&id).copied().unwrap_or(0.0))
        .sum()
}

pub struct ScoringService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoringService<'a> {
    /// Creates a new instance of [`ScoringService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Scores every matchup of the week and updates team records.
    ///
    /// Rosters of the week are locked afterwards. A week can only be scored once.
    pub async fn score_week(&self, league_id: i32, week: i32) -> Result<Vec<MatchupDto>, Error> {
        let txn = self.db.begin().await?;

        let Some(league) = FantasyLeagueRepository::new(&txn).get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        let matchup_repo = MatchupRepository::new(&txn);
        let matchups = matchup_repo.get_by_league_week(league.id, week).await?;
        if matchups.is_empty() {
            return Err(LeagueError::NoMatchups { league_id, week }.into());
        }
        if matchups.iter().any(|m| m.is_complete) {
            return Err(LeagueError::WeekAlreadyScored { league_id, week }.into());
        }

        let team_repo = FantasyTeamRepository::new(&txn);
        let team_ids: Vec<i32> = team_repo
            .get_by_league(league.id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        for team_id in &team_ids {
            ensure_week_slots(&txn, &league, *team_id, week).await?;
        }

        let slot_repo = RosterSlotRepository::new(&txn);
        let occupied = slot_repo.get_occupied(&team_ids, week).await?;
        let mle_team_ids: Vec<i32> = occupied.iter().filter_map(|s| s.mle_team_id).collect();
        let points = MleTeamWeeklyStatsRepository::new(&txn)
            .get_points(league.season, week, &mle_team_ids)
            .await?;

        let mut slots_by_team: HashMap<i32, Vec<entity::roster_slot::Model>> = HashMap::new();
        for slot in occupied {
            slots_by_team.entry(slot.fantasy_team_id).or_default().push(slot);
        }
        let score_of = |team_id: i32| {
            slots_by_team
                .get(&team_id)
                .map(|slots| team_score(slots, &points))
                .unwrap_or(0.0)
        };

        let mut scored = Vec::with_capacity(matchups.len());
        for matchup in matchups {
            let home_score = score_of(matchup.home_team_id);
            let away_score = score_of(matchup.away_team_id);

            for (team_id, points_for, points_against) in [
                (matchup.home_team_id, home_score, away_score),
                (matchup.away_team_id, away_score, home_score),
            ] {
                let Some(team) = team_repo.get(team_id).await? else {
                    return Err(LeagueError::TeamNotFound(team_id).into());
                };
                team_repo.add_result(team, points_for, points_against).await?;
            }

            scored.push(matchup_repo.complete(matchup, home_score, away_score).await?);
        }

        let locked = slot_repo.lock_week(&team_ids, week).await?;

        txn.commit().await?;

        tracing::info!(
            league_id,
            week,
            matchups = scored.len(),
            locked_slots = locked,
            "Scored week"
        );

        Ok(scored.into_iter().map(MatchupDto::from).collect())
    }
}
