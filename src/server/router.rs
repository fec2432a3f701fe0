//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI annotations,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Public read endpoints live under `/api/...`, member actions authorize against the session
/// user and league administration lives under `/api/admin/...`. Routes sharing a path are
/// registered together so `routes!` can merge their methods.
///
/// The OpenAPI document is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MLE Fantasy", description = "MLE Fantasy league API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session user routes"),
        (name = controller::league::LEAGUE_TAG, description = "League management and standings"),
        (name = controller::draft::DRAFT_TAG, description = "Draft board and picks"),
        (name = controller::team::TEAM_TAG, description = "Fantasy team rosters and lineups"),
        (
            name = controller::transaction::TRANSACTION_TAG,
            description = "Trades, waiver claims and pickups"
        ),
        (name = controller::season::SEASON_TAG, description = "Season settings"),
        (name = controller::mle::MLE_TAG, description = "MLE teams, players and stats"),
        (name = controller::user::USER_TAG, description = "User administration"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Session
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        // Leagues
        .routes(routes!(controller::league::list_leagues))
        .routes(routes!(controller::league::get_league))
        .routes(routes!(controller::league::get_leaderboard))
        .routes(routes!(controller::league::get_matchups))
        .routes(routes!(controller::league::join_league))
        .routes(routes!(controller::league::leave_league))
        .routes(routes!(controller::league::create_league))
        .routes(routes!(
            controller::league::update_league,
            controller::league::delete_league
        ))
        .routes(routes!(controller::league::reassign_draft_position))
        .routes(routes!(controller::league::remove_team))
        .routes(routes!(controller::league::generate_schedule))
        .routes(routes!(controller::league::lock_week))
        .routes(routes!(controller::league::score_week))
        // Draft
        .routes(routes!(controller::draft::get_draft_board))
        .routes(routes!(controller::draft::initialize_draft))
        .routes(routes!(controller::draft::start_draft))
        .routes(routes!(controller::draft::make_pick))
        // Teams
        .routes(routes!(
            controller::team::get_roster,
            controller::team::update_roster
        ))
        .routes(routes!(controller::team::update_lineup))
        // Transactions
        .routes(routes!(controller::transaction::propose_trade))
        .routes(routes!(controller::transaction::submit_waiver_claim))
        .routes(routes!(controller::transaction::pickup))
        .routes(routes!(controller::transaction::get_transactions))
        // Seasons
        .routes(routes!(controller::season::get_season_settings))
        .routes(routes!(controller::season::upsert_season_settings))
        // MLE
        .routes(routes!(controller::mle::list_mle_teams))
        .routes(routes!(controller::mle::get_mle_team))
        .routes(routes!(controller::mle::get_mle_team_players))
        .routes(routes!(controller::mle::get_player_stats))
        .routes(routes!(controller::mle::override_stats))
        // Users
        .routes(routes!(controller::user::update_user_status))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
