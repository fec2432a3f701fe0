//! Weekly roster slots: on-demand creation, occupant updates, lineup moves and week locks.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::{DraftStatus, RosterPosition};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        league::WeekLockDto,
        roster::{RosterSlotDto, UpdateLineupDto, UpdateRosterDto},
    },
    server::{
        data::{
            league::FantasyLeagueRepository,
            mle::MleTeamRepository,
            roster::{NewRosterSlot, RosterSlotRepository},
            team::FantasyTeamRepository,
        },
        error::{league::LeagueError, roster::RosterError, Error},
    },
};

/// Order empty slots are filled in when a team acquires an MLE team
const FILL_ORDER: [RosterPosition; 4] = [
    RosterPosition::Doubles,
    RosterPosition::Standard,
    RosterPosition::Flex,
    RosterPosition::Bench,
];

fn fill_rank(position: RosterPosition) -> usize {
    FILL_ORDER
        .iter()
        .position(|p| *p == position)
        .unwrap_or(FILL_ORDER.len())
}

/// Fails unless the league's draft is completed.
///
/// Until then the draft places every pick into a roster slot, so free agency and manual
/// occupant changes would take slots the remaining picks need.
pub fn ensure_draft_completed(
    league: &entity::fantasy_league::Model,
) -> Result<(), LeagueError> {
    if league.draft_status != DraftStatus::Completed {
        return Err(LeagueError::DraftNotCompleted(league.id));
    }

    Ok(())
}

/// Number of slots the league configures for each position
pub fn slot_counts(league: &entity::fantasy_league::Model) -> [(RosterPosition, i32); 4] {
    [
        (RosterPosition::Doubles, league.roster_twos),
        (RosterPosition::Standard, league.roster_threes),
        (RosterPosition::Flex, league.roster_flex),
        (RosterPosition::Bench, league.roster_bench),
    ]
}

/// Returns the team's slots for the week, creating them first if none exist.
///
/// New weeks copy the most recent earlier week's slots (unlocked, occupants kept); a team's
/// first week gets one empty slot per configured roster unit.
pub async fn ensure_week_slots<C: ConnectionTrait>(
    db: &C,
    league: &entity::fantasy_league::Model,
    team_id: i32,
    week: i32,
) -> Result<Vec<entity::roster_slot::Model>, Error> {
    if week < 1 {
        return Err(RosterError::InvalidWeek(week).into());
    }

    let slot_repo = RosterSlotRepository::new(db);

    let slots = slot_repo.get_by_team_week(team_id, week).await?;
    if !slots.is_empty() {
        return Ok(slots);
    }

    let new_slots: Vec<NewRosterSlot> = match slot_repo.latest_week_before(team_id, week).await? {
        Some(previous_week) => slot_repo
            .get_by_team_week(team_id, previous_week)
            .await?
            .into_iter()
            .map(|slot| NewRosterSlot {
                fantasy_team_id: team_id,
                week,
                position: slot.position,
                slot_index: slot.slot_index,
                mle_team_id: slot.mle_team_id,
            })
            .collect(),
        None => slot_counts(league)
            .into_iter()
            .flat_map(|(position, count)| {
                (0..count).map(move |slot_index| NewRosterSlot {
                    fantasy_team_id: team_id,
                    week,
                    position,
                    slot_index,
                    mle_team_id: None,
                })
            })
            .collect(),
    };

    tracing::debug!(team_id, week, slots = new_slots.len(), "Creating roster slots");

    slot_repo.create_many(new_slots).await?;

    Ok(slot_repo.get_by_team_week(team_id, week).await?)
}

/// Puts the MLE team into the team's first empty unlocked slot for the week.
///
/// Slots fill in `2s`, `3s`, `flx`, `be` order, lowest index first.
pub async fn place_in_first_empty_slot<C: ConnectionTrait>(
    db: &C,
    league: &entity::fantasy_league::Model,
    team_id: i32,
    week: i32,
    mle_team_id: i32,
) -> Result<entity::roster_slot::Model, Error> {
    let mut slots = ensure_week_slots(db, league, team_id, week).await?;
    slots.sort_by_key(|s| (fill_rank(s.position), s.slot_index));

    let Some(slot) = slots
        .into_iter()
        .find(|s| s.mle_team_id.is_none() && !s.is_locked)
    else {
        return Err(RosterError::NoEmptySlot(team_id).into());
    };

    Ok(RosterSlotRepository::new(db)
        .set_occupant(slot, Some(mle_team_id))
        .await?)
}

/// Fails if any team of the league holds the MLE team in the week
pub async fn ensure_unrostered<C: ConnectionTrait>(
    db: &C,
    league_id: i32,
    week: i32,
    mle_team_id: i32,
) -> Result<(), Error> {
    let team_ids: Vec<i32> = FantasyTeamRepository::new(db)
        .get_by_league(league_id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    if RosterSlotRepository::new(db)
        .find_occupant(&team_ids, week, mle_team_id)
        .await?
        .is_some()
    {
        return Err(RosterError::AlreadyRostered(mle_team_id).into());
    }

    Ok(())
}

/// Checks a set of lineup moves against the team's current slots for the week.
///
/// Returns the new `(position, slot_index)` of each moved slot. Moves are rejected as a
/// whole if any targeted slot is locked, and the resulting lineup must keep one slot per
/// `(position, slot_index)` with the same number of slots per position.
pub fn plan_lineup(
    team_id: i32,
    week: i32,
    slots: &[entity::roster_slot::Model],
    moves: &[(i32, RosterPosition, i32)],
) -> Result<HashMap<i32, (RosterPosition, i32)>, RosterError> {
    let by_id: HashMap<i32, &entity::roster_slot::Model> =
        slots.iter().map(|s| (s.id, s)).collect();

    let mut planned = HashMap::new();
    for (slot_id, position, slot_index) in moves {
        if !by_id.contains_key(slot_id) {
            return Err(RosterError::SlotNotOnTeam {
                slot_id: *slot_id,
                team_id,
                week,
            });
        }
        if planned.insert(*slot_id, (*position, *slot_index)).is_some() {
            return Err(RosterError::DuplicateSlot(*slot_id));
        }
    }

    let mut locked: Vec<i32> = planned
        .keys()
        .filter(|id| by_id.get(id).is_some_and(|s| s.is_locked))
        .copied()
        .collect();
    if !locked.is_empty() {
        locked.sort();
        return Err(RosterError::SlotsLocked(locked));
    }

    let mut before: HashMap<RosterPosition, i32> = HashMap::new();
    let mut after: HashMap<RosterPosition, i32> = HashMap::new();
    let mut occupied = HashSet::new();
    for slot in slots {
        *before.entry(slot.position).or_default() += 1;

        let (position, slot_index) = planned
            .get(&slot.id)
            .copied()
            .unwrap_or((slot.position, slot.slot_index));
        *after.entry(position).or_default() += 1;

        if !occupied.insert((position, slot_index)) {
            return Err(RosterError::ConflictingPosition);
        }
    }

    let indices_in_range = occupied
        .iter()
        .all(|(position, index)| *index >= 0 && *index < after.get(position).copied().unwrap_or(0));
    if before != after || !indices_in_range {
        return Err(RosterError::LineupShapeChanged);
    }

    Ok(planned)
}

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    /// Creates a new instance of [`RosterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Slots of a team for the week, defaulting to the league's current week
    pub async fn get_roster(
        &self,
        team_id: i32,
        week: Option<i32>,
    ) -> Result<Vec<RosterSlotDto>, Error> {
        let (league, team) = self.get_league_and_team(self.db, team_id).await?;
        let week = week.unwrap_or(league.current_week);

        let slots = ensure_week_slots(self.db, &league, team.id, week).await?;

        Ok(slots.into_iter().map(RosterSlotDto::from).collect())
    }

    /// Sets the occupant of each listed slot.
    ///
    /// Locked slots reject the whole update. After the update an MLE team may appear at most
    /// once across every roster of the league for the week.
    pub async fn update_roster(
        &self,
        team_id: i32,
        update: UpdateRosterDto,
    ) -> Result<Vec<RosterSlotDto>, Error> {
        let txn = self.db.begin().await?;

        let (league, team) = self.get_league_and_team(&txn, team_id).await?;
        ensure_draft_completed(&league)?;
        let slots = ensure_week_slots(&txn, &league, team.id, update.week).await?;

        let mut assignments: HashMap<i32, Option<i32>> = HashMap::new();
        for assignment in &update.slots {
            if !slots.iter().any(|s| s.id == assignment.slot_id) {
                return Err(RosterError::SlotNotOnTeam {
                    slot_id: assignment.slot_id,
                    team_id,
                    week: update.week,
                }
                .into());
            }
            if assignments
                .insert(assignment.slot_id, assignment.mle_team_id)
                .is_some()
            {
                return Err(RosterError::DuplicateSlot(assignment.slot_id).into());
            }
        }

        let mut locked: Vec<i32> = slots
            .iter()
            .filter(|s| s.is_locked && assignments.contains_key(&s.id))
            .map(|s| s.id)
            .collect();
        if !locked.is_empty() {
            locked.sort();
            return Err(RosterError::SlotsLocked(locked).into());
        }

        // Final occupants of this team's slots must be distinct
        let mut seen = HashSet::new();
        for slot in &slots {
            let occupant = assignments.get(&slot.id).copied().unwrap_or(slot.mle_team_id);
            if let Some(mle_team_id) = occupant {
                if !seen.insert(mle_team_id) {
                    return Err(RosterError::AlreadyRostered(mle_team_id).into());
                }
            }
        }

        let other_team_ids: Vec<i32> = FantasyTeamRepository::new(&txn)
            .get_by_league(league.id)
            .await?
            .into_iter()
            .filter(|t| t.id != team.id)
            .map(|t| t.id)
            .collect();
        let slot_repo = RosterSlotRepository::new(&txn);
        let mle_team_repo = MleTeamRepository::new(&txn);

        for mle_team_id in assignments.values().flatten() {
            if mle_team_repo.get(*mle_team_id).await?.is_none() {
                return Err(RosterError::MleTeamNotFound(*mle_team_id).into());
            }
            if slot_repo
                .find_occupant(&other_team_ids, update.week, *mle_team_id)
                .await?
                .is_some()
            {
                return Err(RosterError::AlreadyRostered(*mle_team_id).into());
            }
        }

        for slot in slots {
            if let Some(occupant) = assignments.get(&slot.id) {
                if *occupant != slot.mle_team_id {
                    slot_repo.set_occupant(slot, *occupant).await?;
                }
            }
        }

        let slots = slot_repo.get_by_team_week(team.id, update.week).await?;

        txn.commit().await?;

        Ok(slots.into_iter().map(RosterSlotDto::from).collect())
    }

    /// Moves slots between lineup positions, all or nothing
    pub async fn update_lineup(
        &self,
        team_id: i32,
        update: UpdateLineupDto,
    ) -> Result<Vec<RosterSlotDto>, Error> {
        let txn = self.db.begin().await?;

        let (league, team) = self.get_league_and_team(&txn, team_id).await?;
        let slots = ensure_week_slots(&txn, &league, team.id, update.week).await?;

        let moves: Vec<(i32, RosterPosition, i32)> = update
            .moves
            .iter()
            .map(|m| (m.slot_id, m.position, m.slot_index))
            .collect();
        let planned = plan_lineup(team.id, update.week, &slots, &moves)?;

        let slot_repo = RosterSlotRepository::new(&txn);
        for slot in slots {
            if let Some((position, slot_index)) = planned.get(&slot.id).copied() {
                slot_repo.set_position(slot, position, slot_index).await?;
            }
        }

        let slots = slot_repo.get_by_team_week(team.id, update.week).await?;

        txn.commit().await?;

        Ok(slots.into_iter().map(RosterSlotDto::from).collect())
    }

    /// Locks every roster of the league for the week, creating missing weeks first
    pub async fn lock_week(&self, league_id: i32, week: i32) -> Result<WeekLockDto, Error> {
        let txn = self.db.begin().await?;

        let Some(league) = FantasyLeagueRepository::new(&txn).get(league_id).await? else {
            return Err(LeagueError::LeagueNotFound(league_id).into());
        };

        let team_ids: Vec<i32> = FantasyTeamRepository::new(&txn)
            .get_by_league(league.id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        for team_id in &team_ids {
            ensure_week_slots(&txn, &league, *team_id, week).await?;
        }

        let locked_slots = RosterSlotRepository::new(&txn)
            .lock_week(&team_ids, week)
            .await?;

        txn.commit().await?;

        tracing::info!(league_id, week, locked_slots, "Locked roster week");

        Ok(WeekLockDto {
            league_id,
            week,
            locked_slots,
        })
    }

    async fn get_league_and_team<C: ConnectionTrait>(
        &self,
        db: &C,
        team_id: i32,
    ) -> Result<(entity::fantasy_league::Model, entity::fantasy_team::Model), Error> {
        let Some(team) = FantasyTeamRepository::new(db).get(team_id).await? else {
            return Err(LeagueError::TeamNotFound(team_id).into());
        };
        let Some(league) = FantasyLeagueRepository::new(db).get(team.league_id).await? else {
            return Err(Error::InternalError(format!(
                "Team ID {} references missing league ID {}",
                team.id, team.league_id
            )));
        };

        Ok((league, team))
    }
}
