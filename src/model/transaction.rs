use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{ProposalStatus, TransactionKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposeTradeDto {
    pub receiver_team_id: i32,
    /// MLE teams on the proposer's roster
    pub offered_mle_team_ids: Vec<i32>,
    /// MLE teams on the receiver's roster
    pub requested_mle_team_ids: Vec<i32>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeItemDto {
    pub from_team_id: i32,
    pub mle_team_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeDto {
    pub id: i32,
    pub league_id: i32,
    pub proposer_team_id: i32,
    pub receiver_team_id: i32,
    #[schema(value_type = String, example = "pending")]
    pub status: ProposalStatus,
    pub message: Option<String>,
    pub items: Vec<TradeItemDto>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWaiverClaimDto {
    pub add_mle_team_id: i32,
    pub drop_mle_team_id: Option<i32>,
    /// Required for FAAB leagues, ignored otherwise
    pub bid_amount: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaiverClaimDto {
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: i32,
    pub add_mle_team_id: i32,
    pub drop_mle_team_id: Option<i32>,
    pub bid_amount: Option<i32>,
    pub priority: Option<i32>,
    pub week: i32,
    #[schema(value_type = String, example = "pending")]
    pub status: ProposalStatus,
    pub created_at: NaiveDateTime,
}

impl From<entity::waiver_claim::Model> for WaiverClaimDto {
    fn from(claim: entity::waiver_claim::Model) -> Self {
        Self {
            id: claim.id,
            league_id: claim.league_id,
            fantasy_team_id: claim.fantasy_team_id,
            add_mle_team_id: claim.add_mle_team_id,
            drop_mle_team_id: claim.drop_mle_team_id,
            bid_amount: claim.bid_amount,
            priority: claim.priority,
            week: claim.week,
            status: claim.status,
            created_at: claim.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupDto {
    pub add_mle_team_id: i32,
    pub drop_mle_team_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: i32,
    pub league_id: i32,
    pub fantasy_team_id: i32,
    #[schema(value_type = String, example = "add")]
    pub kind: TransactionKind,
    pub mle_team_id: Option<i32>,
    pub related_team_id: Option<i32>,
    pub week: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::transaction::Model> for TransactionDto {
    fn from(transaction: entity::transaction::Model) -> Self {
        Self {
            id: transaction.id,
            league_id: transaction.league_id,
            fantasy_team_id: transaction.fantasy_team_id,
            kind: transaction.kind,
            mle_team_id: transaction.mle_team_id,
            related_team_id: transaction.related_team_id,
            week: transaction.week,
            created_at: transaction.created_at,
        }
    }
}
