pub mod prelude;

pub mod draft_pick;
pub mod fantasy_league;
pub mod fantasy_team;
pub mod matchup;
pub mod mle_player;
pub mod mle_team;
pub mod mle_team_weekly_stats;
pub mod player_historical_stats;
pub mod roster_slot;
pub mod sea_orm_active_enums;
pub mod season_settings;
pub mod trade;
pub mod trade_item;
pub mod transaction;
pub mod user;
pub mod waiver_claim;
