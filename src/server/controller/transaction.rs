use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        transaction::{
            PickupDto, ProposeTradeDto, SubmitWaiverClaimDto, TradeDto, TransactionDto,
            WaiverClaimDto,
        },
    },
    server::{
        controller::util::auth::{AuthGuard, Permission},
        error::Error,
        model::app::AppState,
        service::transaction::TransactionService,
    },
};

pub static TRANSACTION_TAG: &str = "transaction";

/// Propose a trade to another team of the league
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/trades",
    tag = TRANSACTION_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = ProposeTradeDto,
    responses(
        (status = 201, description = "Trade proposed", body = SuccessDto<TradeDto>),
        (status = 400, description = "Invalid trade or trade deadline passed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a league member or account suspended", body = ErrorDto),
        (status = 404, description = "League or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn propose_trade(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<ProposeTradeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require_league_member(Permission::ActiveMember, league_id)
        .await?;

    let trade = TransactionService::new(&state.db)
        .propose_trade(league_id, user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(trade))))
}

/// Submit a waiver claim for an unrostered MLE team
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/waivers",
    tag = TRANSACTION_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = SubmitWaiverClaimDto,
    responses(
        (status = 201, description = "Claim submitted", body = SuccessDto<WaiverClaimDto>),
        (status = 400, description = "Invalid bid or MLE team unavailable", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a league member or account suspended", body = ErrorDto),
        (status = 404, description = "League or MLE team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_waiver_claim(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<SubmitWaiverClaimDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require_league_member(Permission::ActiveMember, league_id)
        .await?;

    let claim = TransactionService::new(&state.db)
        .submit_waiver_claim(league_id, user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(claim))))
}

/// Pick up an unrostered MLE team, optionally dropping one
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/pickups",
    tag = TRANSACTION_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = PickupDto,
    responses(
        (
            status = 201,
            description = "Logged drop and add transactions",
            body = SuccessDto<Vec<TransactionDto>>
        ),
        (status = 400, description = "MLE team unavailable or roster full", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a league member or account suspended", body = ErrorDto),
        (status = 404, description = "League or MLE team not found", body = ErrorDto),
        (status = 423, description = "The dropped team's slot is locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pickup(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
    Json(payload): Json<PickupDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthGuard::new(&state.db, &session)
        .require_league_member(Permission::ActiveMember, league_id)
        .await?;

    let transactions = TransactionService::new(&state.db)
        .pickup(league_id, user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(SuccessDto::new(transactions))))
}

/// Transaction history of a league, newest first
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/transactions",
    tag = TRANSACTION_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Transactions of the league", body = Vec<TransactionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a league member", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthGuard::new(&state.db, &session)
        .require_league_member(Permission::Member, league_id)
        .await?;

    let transactions = TransactionService::new(&state.db).history(league_id).await?;

    Ok((StatusCode::OK, Json(transactions)))
}
