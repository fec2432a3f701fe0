use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSettingsDto {
    pub season: i32,
    pub current_week: i32,
    pub regular_season_weeks: i32,
    pub trade_deadline_week: i32,
}

impl From<entity::season_settings::Model> for SeasonSettingsDto {
    fn from(settings: entity::season_settings::Model) -> Self {
        Self {
            season: settings.season,
            current_week: settings.current_week,
            regular_season_weeks: settings.regular_season_weeks,
            trade_deadline_week: settings.trade_deadline_week,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeasonSettingsDto {
    pub current_week: i32,
    pub regular_season_weeks: i32,
    pub trade_deadline_week: i32,
}
