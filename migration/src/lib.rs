pub use sea_orm_migration::prelude::*;

mod m20260301_000001_fantasy_user;
mod m20260301_000002_mle_team;
mod m20260301_000003_mle_player;
mod m20260301_000004_player_historical_stats;
mod m20260301_000005_mle_team_weekly_stats;
mod m20260301_000006_season_settings;
mod m20260301_000007_fantasy_league;
mod m20260301_000008_fantasy_team;
mod m20260301_000009_draft_pick;
mod m20260301_000010_roster_slot;
mod m20260301_000011_matchup;
mod m20260301_000012_trade;
mod m20260301_000013_trade_item;
mod m20260301_000014_waiver_claim;
mod m20260301_000015_fantasy_transaction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_fantasy_user::Migration),
            Box::new(m20260301_000002_mle_team::Migration),
            Box::new(m20260301_000003_mle_player::Migration),
            Box::new(m20260301_000004_player_historical_stats::Migration),
            Box::new(m20260301_000005_mle_team_weekly_stats::Migration),
            Box::new(m20260301_000006_season_settings::Migration),
            Box::new(m20260301_000007_fantasy_league::Migration),
            Box::new(m20260301_000008_fantasy_team::Migration),
            Box::new(m20260301_000009_draft_pick::Migration),
            Box::new(m20260301_000010_roster_slot::Migration),
            Box::new(m20260301_000011_matchup::Migration),
            Box::new(m20260301_000012_trade::Migration),
            Box::new(m20260301_000013_trade_item::Migration),
            Box::new(m20260301_000014_waiver_claim::Migration),
            Box::new(m20260301_000015_fantasy_transaction::Migration),
        ]
    }
}
