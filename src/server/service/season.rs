use sea_orm::DatabaseConnection;

use crate::{
    model::season::{SeasonSettingsDto, UpdateSeasonSettingsDto},
    server::{
        data::season::SeasonSettingsRepository,
        error::{league::LeagueError, Error},
    },
};

/// Checks that the weeks of a season's settings are consistent with each other
pub fn validate_settings(settings: &UpdateSeasonSettingsDto) -> Result<(), LeagueError> {
    if settings.regular_season_weeks < 1 {
        return Err(LeagueError::Validation(
            "Regular season must have at least one week.".to_string(),
        ));
    }
    if settings.current_week < 1 {
        return Err(LeagueError::Validation(
            "Current week must be at least 1.".to_string(),
        ));
    }
    if settings.trade_deadline_week < 1
        || settings.trade_deadline_week > settings.regular_season_weeks
    {
        return Err(LeagueError::Validation(
            "Trade deadline must fall within the regular season.".to_string(),
        ));
    }

    Ok(())
}

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    /// Creates a new instance of [`SeasonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_settings(&self, season: i32) -> Result<SeasonSettingsDto, Error> {
        match SeasonSettingsRepository::new(self.db)
            .get_by_season(season)
            .await?
        {
            Some(settings) => Ok(SeasonSettingsDto::from(settings)),
            None => Err(LeagueError::SeasonNotFound(season).into()),
        }
    }

    pub async fn upsert_settings(
        &self,
        season: i32,
        settings: UpdateSeasonSettingsDto,
    ) -> Result<SeasonSettingsDto, Error> {
        validate_settings(&settings)?;

        let settings = SeasonSettingsRepository::new(self.db)
            .upsert(season, settings)
            .await?;

        tracing::info!(
            season,
            current_week = settings.current_week,
            "Updated season settings"
        );

        Ok(SeasonSettingsDto::from(settings))
    }
}
