use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// A team about to join a league
pub struct NewTeam {
    pub league_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub short_code: String,
    pub draft_position: i32,
    pub faab_remaining: Option<i32>,
    pub waiver_priority: Option<i32>,
}

pub struct FantasyTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FantasyTeamRepository<'a, C> {
    /// Creates a new instance of [`FantasyTeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team with an empty record, short codes are stored upper-cased
    pub async fn create(&self, team: NewTeam) -> Result<entity::fantasy_team::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::fantasy_team::ActiveModel {
            league_id: ActiveValue::Set(team.league_id),
            owner_id: ActiveValue::Set(team.owner_id),
            name: ActiveValue::Set(team.name),
            short_code: ActiveValue::Set(team.short_code.to_uppercase()),
            draft_position: ActiveValue::Set(Some(team.draft_position)),
            faab_remaining: ActiveValue::Set(team.faab_remaining),
            waiver_priority: ActiveValue::Set(team.waiver_priority),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            ties: ActiveValue::Set(0),
            points_for: ActiveValue::Set(0.0),
            points_against: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find_by_id(team_id)
            .one(self.db)
            .await
    }

    /// Teams of a league ordered by draft position
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::fantasy_team::Column::DraftPosition)
            .order_by_asc(entity::fantasy_team::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_league(&self, league_id: i32) -> Result<u64, DbErr> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await
    }

    pub async fn find_by_owner(
        &self,
        league_id: i32,
        owner_id: i32,
    ) -> Result<Option<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::LeagueId.eq(league_id))
            .filter(entity::fantasy_team::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Case-insensitive short code lookup within a league
    pub async fn find_by_short_code(
        &self,
        league_id: i32,
        short_code: &str,
    ) -> Result<Option<entity::fantasy_team::Model>, DbErr> {
        entity::prelude::FantasyTeam::find()
            .filter(entity::fantasy_team::Column::LeagueId.eq(league_id))
            .filter(entity::fantasy_team::Column::ShortCode.eq(short_code.to_uppercase()))
            .one(self.db)
            .await
    }

    pub async fn set_draft_position(
        &self,
        team: entity::fantasy_team::Model,
        draft_position: Option<i32>,
    ) -> Result<entity::fantasy_team::Model, DbErr> {
        let mut team_am = team.into_active_model();
        team_am.draft_position = ActiveValue::Set(draft_position);
        team_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        team_am.update(self.db).await
    }

    /// Adds a weekly result to the team's record.
    ///
    /// Equal scores count as a tie.
    pub async fn add_result(
        &self,
        team: entity::fantasy_team::Model,
        points_for: f64,
        points_against: f64,
    ) -> Result<entity::fantasy_team::Model, DbErr> {
        let (wins, losses, ties) = match points_for.partial_cmp(&points_against) {
            Some(std::cmp::Ordering::Greater) => (team.wins + 1, team.losses, team.ties),
            Some(std::cmp::Ordering::Less) => (team.wins, team.losses + 1, team.ties),
            _ => (team.wins, team.losses, team.ties + 1),
        };
        let total_for = team.points_for + points_for;
        let total_against = team.points_against + points_against;

        let mut team_am = team.into_active_model();
        team_am.wins = ActiveValue::Set(wins);
        team_am.losses = ActiveValue::Set(losses);
        team_am.ties = ActiveValue::Set(ties);
        team_am.points_for = ActiveValue::Set(total_for);
        team_am.points_against = ActiveValue::Set(total_against);
        team_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        team_am.update(self.db).await
    }

    /// Renumbers draft positions and waiver priorities of a league's teams to 1..=n.
    ///
    /// Relative order is preserved and teams without a value keep none. Run after a team
    /// leaves or is removed so no gaps remain.
    pub async fn compact_standings(&self, league_id: i32) -> Result<(), DbErr> {
        let teams = self.get_by_league(league_id).await?;

        let mut by_position: Vec<(i32, i32)> = teams
            .iter()
            .filter_map(|t| t.draft_position.map(|p| (p, t.id)))
            .collect();
        by_position.sort();

        let mut by_priority: Vec<(i32, i32)> = teams
            .iter()
            .filter_map(|t| t.waiver_priority.map(|p| (p, t.id)))
            .collect();
        by_priority.sort();

        for team in teams {
            let position = by_position
                .iter()
                .position(|(_, id)| *id == team.id)
                .map(|index| index as i32 + 1);
            let priority = by_priority
                .iter()
                .position(|(_, id)| *id == team.id)
                .map(|index| index as i32 + 1);

            if position == team.draft_position && priority == team.waiver_priority {
                continue;
            }

            let mut team_am = team.into_active_model();
            team_am.draft_position = ActiveValue::Set(position);
            team_am.waiver_priority = ActiveValue::Set(priority);
            team_am.update(self.db).await?;
        }

        Ok(())
    }

    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FantasyTeam::delete_by_id(team_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_league(&self, league_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FantasyTeam::delete_many()
            .filter(entity::fantasy_team::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await
    }
}
