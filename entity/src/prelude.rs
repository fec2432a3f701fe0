pub use super::draft_pick::Entity as DraftPick;
pub use super::fantasy_league::Entity as FantasyLeague;
pub use super::fantasy_team::Entity as FantasyTeam;
pub use super::matchup::Entity as Matchup;
pub use super::mle_player::Entity as MlePlayer;
pub use super::mle_team::Entity as MleTeam;
pub use super::mle_team_weekly_stats::Entity as MleTeamWeeklyStats;
pub use super::player_historical_stats::Entity as PlayerHistoricalStats;
pub use super::roster_slot::Entity as RosterSlot;
pub use super::season_settings::Entity as SeasonSettings;
pub use super::trade::Entity as Trade;
pub use super::trade_item::Entity as TradeItem;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
pub use super::waiver_claim::Entity as WaiverClaim;
