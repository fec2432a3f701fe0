use sea_orm::{sea_query::TableCreateStatement, DbBackend, Schema};

/// CREATE TABLE statements for every fantasy table, ordered so that referenced
/// tables are created before the tables that reference them.
pub fn fantasy_tables() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::MleTeam),
        schema.create_table_from_entity(entity::prelude::MlePlayer),
        schema.create_table_from_entity(entity::prelude::PlayerHistoricalStats),
        schema.create_table_from_entity(entity::prelude::MleTeamWeeklyStats),
        schema.create_table_from_entity(entity::prelude::SeasonSettings),
        schema.create_table_from_entity(entity::prelude::FantasyLeague),
        schema.create_table_from_entity(entity::prelude::FantasyTeam),
        schema.create_table_from_entity(entity::prelude::DraftPick),
        schema.create_table_from_entity(entity::prelude::RosterSlot),
        schema.create_table_from_entity(entity::prelude::Matchup),
        schema.create_table_from_entity(entity::prelude::Trade),
        schema.create_table_from_entity(entity::prelude::TradeItem),
        schema.create_table_from_entity(entity::prelude::WaiverClaim),
        schema.create_table_from_entity(entity::prelude::Transaction),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

#[macro_export]
macro_rules! test_setup_with_fantasy_tables {
    () => {{
        $crate::TestBuilder::new().with_fantasy_tables().build().await
    }};
}
