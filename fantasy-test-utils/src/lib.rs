pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{factory, LeagueFixture},
        test_setup_with_fantasy_tables, test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
