//! League lifecycle: creation, membership, draft positions, removal and standings.

use entity::sea_orm_active_enums::{DraftStatus, WaiverSystem};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::league::{
        CreateLeagueDto, JoinLeagueDto, LeaderboardEntryDto, LeagueDetailDto, LeagueDto,
        MatchupDto, ReassignDraftPositionDto, TeamDto, UpdateLeagueDto,
    },
    server::{
        data::{
            draft_pick::DraftPickRepository,
            league::FantasyLeagueRepository,
            matchup::MatchupRepository,
            roster::RosterSlotRepository,
            team::{FantasyTeamRepository, NewTeam},
            trade::TradeRepository,
            transaction::TransactionRepository,
            user::UserRepository,
            waiver::WaiverClaimRepository,
        },
        error::{auth::AuthError, draft::DraftError, league::LeagueError, Error},
    },
};

/// Checks that a short code is exactly three ASCII letters or digits
pub fn validate_short_code(short_code: &str) -> Result<(), LeagueError> {
    if short_code.len() == 3 && short_code.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(LeagueError::InvalidShortCode(short_code.to_string()))
    }
}

/// Validates the settings of a new league, normalizing the FAAB budget to the waiver system
pub fn validate_new_league(league: &mut CreateLeagueDto) -> Result<(), LeagueError> {
    if league.name.trim().is_empty() {
        return Err(LeagueError::Validation("League name is required.".to_string()));
    }
    if league.max_teams < 2 {
        return Err(LeagueError::Validation(
            "A league needs room for at least two teams.".to_string(),
        ));
    }
    if league.playoff_teams < 0 || league.playoff_teams > league.max_teams {
        return Err(LeagueError::Validation(
            "Playoff teams must be between 0 and the maximum number of teams.".to_string(),
        ));
    }

    let config = league.roster_config;
    if config.twos < 0 || config.threes < 0 || config.flex < 0 || config.bench < 0 {
        return Err(LeagueError::Validation(
            "Roster slot counts cannot be negative.".to_string(),
        ));
    }
    if config.total() < 1 {
        return Err(LeagueError::Validation(
            "Roster must have at least one slot.".to_string(),
        ));
    }

    if let Some(seconds) = league.draft_pick_time_seconds {
        if seconds < 1 {
            return Err(LeagueError::Validation(
                "Draft pick time must be positive.".to_string(),
            ));
        }
    }

    match (league.waiver_system, league.faab_budget) {
        (WaiverSystem::Faab, None) => {
            return Err(LeagueError::Validation(
                "FAAB leagues require a budget.".to_string(),
            ))
        }
        (WaiverSystem::Faab, Some(budget)) if budget < 0 => {
            return Err(LeagueError::Validation(
                "FAAB budget cannot be negative.".to_string(),
            ))
        }
        (WaiverSystem::Faab, Some(_)) => (),
        _ => league.faab_budget = None,
    }

    Ok(())
}

/// Deletes a team along with its roster, claims, trades and matchups.
///
/// Draft picks owned by the team are kept but left without a team, and the remaining teams'
/// draft positions and waiver priorities are renumbered without gaps. Transaction log entries
/// stay and keep the removed team's ID. A draft in progress with no open pick left is
/// completed.
pub async fn remove_team_rows<C: ConnectionTrait>(
    db: &C,
    team: &entity::fantasy_team::Model,
) -> Result<(), Error> {
    RosterSlotRepository::new(db)
        .delete_by_teams(&[team.id])
        .await?;
    WaiverClaimRepository::new(db).delete_by_team(team.id).await?;
    TradeRepository::new(db).delete_by_team(team.id).await?;
    MatchupRepository::new(db).delete_by_team(team.id).await?;
    let pick_repo = DraftPickRepository::new(db);
    let unassigned = pick_repo.unassign_team(team.id).await?;

    let team_repo = FantasyTeamRepository::new(db);
    team_repo.delete(team.id).await?;
    team_repo.compact_standings(team.league_id).await?;

    let league_repo = FantasyLeagueRepository::new(db);
    if let Some(league) = league_repo.get(team.league_id).await? {
        if league.draft_status == DraftStatus::InProgress
            && pick_repo.next_open(league.id).await?.is_none()
        {
            league_repo
                .set_draft_state(league, DraftStatus::Completed, None)
                .await?;
            tracing::info!(league_id = team.league_id, "Completed draft after team removal");
        }
    }

    tracing::info!(
        league_id = team.league_id,
        team_id = team.id,
        unassigned_picks = unassigned,
        "Removed team"
    );

    Ok(())
}

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueService<'a> {
    /// Creates a new instance of [`LeagueService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_leagues(&self) -> Result<Vec<LeagueDto>, Error> {
        let leagues = FantasyLeagueRepository::new(self.db).get_all().await?;

        Ok(leagues.into_iter().map(LeagueDto::from).collect())
    }

    pub async fn get_league(&self, league_id: i32) -> Result<LeagueDetailDto, Error> {
        let league = self.require_league(self.db, league_id).await?;
        let teams = FantasyTeamRepository::new(self.db)
            .get_by_league(league.id)
            .await?;

        Ok(LeagueDetailDto {
            league: LeagueDto::from(league),
            teams: teams.into_iter().map(TeamDto::from).collect(),
        })
    }

    /// Creates a league, the creating admin becomes commissioner unless one is given
    pub async fn create_league(
        &self,
        creator_id: i32,
        mut league: CreateLeagueDto,
    ) -> Result<LeagueDto, Error> {
        validate_new_league(&mut league)?;

        let commissioner_id = league.commissioner_id.unwrap_or(creator_id);
        if UserRepository::new(self.db)
            .get(commissioner_id)
            .await?
            .is_none()
        {
            return Err(LeagueError::UserNotFound(commissioner_id).into());
        }
        league.commissioner_id = Some(commissioner_id);

        let league = FantasyLeagueRepository::new(self.db).create(league).await?;

        tracing::info!(league_id = league.id, name = %league.name, "Created league");

        Ok(LeagueDto::from(league))
    }

    pub async fn update_league(
        &self,
        league_id: i32,
        changes: UpdateLeagueDto,
    ) -> Result<LeagueDto, Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;

        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(LeagueError::Validation("League name is required.".to_string()).into());
            }
        }

        let max_teams = changes.max_teams.unwrap_or(league.max_teams);
        let team_count = FantasyTeamRepository::new(&txn)
            .count_by_league(league.id)
            .await?;
        if (max_teams as i64) < team_count as i64 || max_teams < 2 {
            return Err(LeagueError::Validation(format!(
                "Maximum teams must be at least 2 and no fewer than the {} teams already joined.",
                team_count
            ))
            .into());
        }

        let playoff_teams = changes.playoff_teams.unwrap_or(league.playoff_teams);
        if playoff_teams < 0 || playoff_teams > max_teams {
            return Err(LeagueError::Validation(
                "Playoff teams must be between 0 and the maximum number of teams.".to_string(),
            )
            .into());
        }

        if changes.current_week.is_some_and(|week| week < 1) {
            return Err(
                LeagueError::Validation("Current week must be at least 1.".to_string()).into(),
            );
        }
        if changes.draft_pick_time_seconds.is_some_and(|s| s < 1) {
            return Err(
                LeagueError::Validation("Draft pick time must be positive.".to_string()).into(),
            );
        }
        if let Some(commissioner_id) = changes.commissioner_id {
            if UserRepository::new(&txn).get(commissioner_id).await?.is_none() {
                return Err(LeagueError::UserNotFound(commissioner_id).into());
            }
        }

        let league = FantasyLeagueRepository::new(&txn)
            .update(league, changes)
            .await?;

        txn.commit().await?;

        Ok(LeagueDto::from(league))
    }

    /// Deletes a league and every row belonging to it in one transaction
    pub async fn delete_league(&self, league_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;
        let team_ids: Vec<i32> = FantasyTeamRepository::new(&txn)
            .get_by_league(league.id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        TradeRepository::new(&txn).delete_by_league(league.id).await?;
        WaiverClaimRepository::new(&txn)
            .delete_by_league(league.id)
            .await?;
        TransactionRepository::new(&txn)
            .delete_by_league(league.id)
            .await?;
        MatchupRepository::new(&txn)
            .delete_by_league(league.id)
            .await?;
        RosterSlotRepository::new(&txn)
            .delete_by_teams(&team_ids)
            .await?;
        DraftPickRepository::new(&txn)
            .delete_by_league(league.id)
            .await?;
        FantasyTeamRepository::new(&txn)
            .delete_by_league(league.id)
            .await?;
        FantasyLeagueRepository::new(&txn).delete(league.id).await?;

        txn.commit().await?;

        tracing::info!(league_id, teams = team_ids.len(), "Deleted league");

        Ok(())
    }

    /// Adds a team owned by the user to the league.
    ///
    /// The team takes the next draft position. FAAB leagues seed the league budget, other
    /// waiver systems seed the next waiver priority.
    pub async fn join_league(
        &self,
        league_id: i32,
        user_id: i32,
        join: JoinLeagueDto,
    ) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;
        let team_repo = FantasyTeamRepository::new(&txn);

        let team_count = team_repo.count_by_league(league.id).await?;
        if team_count >= league.max_teams as u64 {
            return Err(LeagueError::LeagueFull(league.id).into());
        }
        if league.draft_status != DraftStatus::NotStarted {
            return Err(LeagueError::SeasonStarted(league.id).into());
        }
        if team_repo.find_by_owner(league.id, user_id).await?.is_some() {
            return Err(LeagueError::AlreadyJoined(league.id).into());
        }

        let name = join.name.trim().to_string();
        if name.is_empty() {
            return Err(LeagueError::Validation("Team name is required.".to_string()).into());
        }
        validate_short_code(&join.short_code)?;
        if team_repo
            .find_by_short_code(league.id, &join.short_code)
            .await?
            .is_some()
        {
            return Err(LeagueError::ShortCodeTaken(join.short_code.to_uppercase()).into());
        }

        let next = team_count as i32 + 1;
        let (faab_remaining, waiver_priority) = match league.waiver_system {
            WaiverSystem::Faab => (Some(league.faab_budget.unwrap_or(0)), None),
            WaiverSystem::Rolling | WaiverSystem::Fixed => (None, Some(next)),
        };

        let team = team_repo
            .create(NewTeam {
                league_id: league.id,
                owner_id: user_id,
                name,
                short_code: join.short_code,
                draft_position: next,
                faab_remaining,
                waiver_priority,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(league_id, user_id, team_id = team.id, "User joined league");

        Ok(TeamDto::from(team))
    }

    /// Removes the user's team from the league.
    ///
    /// Commissioners cannot leave, nor can anyone once the draft has started or while the
    /// team has pending trades or waiver claims.
    pub async fn leave_league(&self, league_id: i32, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;
        let Some(team) = FantasyTeamRepository::new(&txn)
            .find_by_owner(league.id, user_id)
            .await?
        else {
            return Err(AuthError::NotLeagueMember { user_id, league_id }.into());
        };

        if league.commissioner_id == Some(user_id) {
            return Err(LeagueError::CommissionerCannotLeave(league.id).into());
        }
        if league.draft_status != DraftStatus::NotStarted {
            return Err(LeagueError::SeasonStarted(league.id).into());
        }
        if TradeRepository::new(&txn).has_pending_for_team(team.id).await?
            || WaiverClaimRepository::new(&txn)
                .has_pending_for_team(team.id)
                .await?
        {
            return Err(LeagueError::PendingActivity(team.id).into());
        }

        remove_team_rows(&txn, &team).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Moves a team to another draft position, swapping with the team currently holding it
    pub async fn reassign_draft_position(
        &self,
        league_id: i32,
        team_id: i32,
        reassign: ReassignDraftPositionDto,
    ) -> Result<Vec<TeamDto>, Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;
        if league.draft_status != DraftStatus::NotStarted {
            return Err(DraftError::InvalidStatus {
                league_id: league.id,
                status: league.draft_status,
            }
            .into());
        }

        let team_repo = FantasyTeamRepository::new(&txn);
        let teams = team_repo.get_by_league(league.id).await?;

        let target = reassign.draft_position;
        if target < 1 || target > teams.len() as i32 {
            return Err(LeagueError::Validation(format!(
                "Draft position must be between 1 and {}.",
                teams.len()
            ))
            .into());
        }

        let Some(team) = teams.iter().find(|t| t.id == team_id).cloned() else {
            return Err(LeagueError::TeamNotFound(team_id).into());
        };
        let previous = team.draft_position;
        let holder = teams
            .iter()
            .find(|t| t.id != team.id && t.draft_position == Some(target))
            .cloned();

        if let Some(holder) = holder {
            // Clear first so the two teams never share a position
            let team = team_repo.set_draft_position(team, None).await?;
            team_repo.set_draft_position(holder, previous).await?;
            team_repo.set_draft_position(team, Some(target)).await?;
        } else {
            team_repo.set_draft_position(team, Some(target)).await?;
        }

        let teams = team_repo.get_by_league(league.id).await?;

        txn.commit().await?;

        Ok(teams.into_iter().map(TeamDto::from).collect())
    }

    pub async fn remove_team(&self, league_id: i32, team_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let league = self.require_league(&txn, league_id).await?;
        let team = match FantasyTeamRepository::new(&txn).get(team_id).await? {
            Some(team) if team.league_id == league.id => team,
            _ => return Err(LeagueError::TeamNotFound(team_id).into()),
        };

        remove_team_rows(&txn, &team).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Standings ordered by wins, then points for, then team name
    pub async fn leaderboard(&self, league_id: i32) -> Result<Vec<LeaderboardEntryDto>, Error> {
        let league = self.require_league(self.db, league_id).await?;
        let mut teams = FantasyTeamRepository::new(self.db)
            .get_by_league(league.id)
            .await?;

        teams.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then(b.points_for.total_cmp(&a.points_for))
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(teams
            .into_iter()
            .enumerate()
            .map(|(index, team)| LeaderboardEntryDto {
                rank: index as i32 + 1,
                team_id: team.id,
                name: team.name,
                short_code: team.short_code,
                wins: team.wins,
                losses: team.losses,
                ties: team.ties,
                points_for: team.points_for,
                points_against: team.points_against,
            })
            .collect())
    }

    /// Matchups of a week, defaulting to the league's current week
    pub async fn matchups(
        &self,
        league_id: i32,
        week: Option<i32>,
    ) -> Result<Vec<MatchupDto>, Error> {
        let league = self.require_league(self.db, league_id).await?;
        let week = week.unwrap_or(league.current_week);

        let matchups = MatchupRepository::new(self.db)
            .get_by_league_week(league.id, week)
            .await?;

        Ok(matchups.into_iter().map(MatchupDto::from).collect())
    }

    async fn require_league<C: ConnectionTrait>(
        &self,
        db: &C,
        league_id: i32,
    ) -> Result<entity::fantasy_league::Model, Error> {
        match FantasyLeagueRepository::new(db).get(league_id).await? {
            Some(league) => Ok(league),
            None => Err(LeagueError::LeagueNotFound(league_id).into()),
        }
    }
}
