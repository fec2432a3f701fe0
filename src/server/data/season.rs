use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::season::UpdateSeasonSettingsDto;

pub struct SeasonSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonSettingsRepository<'a, C> {
    /// Creates a new instance of [`SeasonSettingsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_season(
        &self,
        season: i32,
    ) -> Result<Option<entity::season_settings::Model>, DbErr> {
        entity::prelude::SeasonSettings::find()
            .filter(entity::season_settings::Column::Season.eq(season))
            .one(self.db)
            .await
    }

    /// Creates or replaces the settings for a season
    pub async fn upsert(
        &self,
        season: i32,
        settings: UpdateSeasonSettingsDto,
    ) -> Result<entity::season_settings::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let Some(existing) = self.get_by_season(season).await? else {
            return entity::season_settings::ActiveModel {
                season: ActiveValue::Set(season),
                current_week: ActiveValue::Set(settings.current_week),
                regular_season_weeks: ActiveValue::Set(settings.regular_season_weeks),
                trade_deadline_week: ActiveValue::Set(settings.trade_deadline_week),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await;
        };

        let mut settings_am = existing.into_active_model();
        settings_am.current_week = ActiveValue::Set(settings.current_week);
        settings_am.regular_season_weeks = ActiveValue::Set(settings.regular_season_weeks);
        settings_am.trade_deadline_week = ActiveValue::Set(settings.trade_deadline_week);
        settings_am.updated_at = ActiveValue::Set(now);

        settings_am.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod upsert {
        use fantasy_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::{
            model::season::UpdateSeasonSettingsDto, server::data::season::SeasonSettingsRepository,
        };

        /// Expect the second upsert to update the existing row rather than insert another
        #[tokio::test]
        async fn updates_existing_season() -> Result<(), TestError> {
            let test = test_setup_with_fantasy_tables!()?;
            let repo = SeasonSettingsRepository::new(&test.db);

            repo.upsert(
                18,
                UpdateSeasonSettingsDto {
                    current_week: 1,
                    regular_season_weeks: 10,
                    trade_deadline_week: 7,
                },
            )
            .await?;
            let updated = repo
                .upsert(
                    18,
                    UpdateSeasonSettingsDto {
                        current_week: 4,
                        regular_season_weeks: 10,
                        trade_deadline_week: 8,
                    },
                )
                .await?;

            assert_eq!(updated.current_week, 4);
            assert_eq!(updated.trade_deadline_week, 8);
            assert_eq!(
                entity::prelude::SeasonSettings::find().count(&test.db).await?,
                1
            );

            Ok(())
        }
    }
}
