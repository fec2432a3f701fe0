use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Trade deadline week {deadline:?} has passed, current week is {week:?}")]
    TradeDeadlinePassed { deadline: i32, week: i32 },
    #[error("Trade proposal contains no MLE teams")]
    EmptyTrade,
    #[error("Team ID {0:?} cannot trade with itself")]
    TradeWithSelf(i32),
    #[error("MLE team ID {mle_team_id:?} is not on team ID {team_id:?}'s roster")]
    NotOnRoster { team_id: i32, mle_team_id: i32 },
    #[error("MLE team ID {0:?} is already rostered in this league")]
    AlreadyRostered(i32),
    #[error("FAAB league requires a bid amount")]
    BidRequired,
    #[error("Bid {bid:?} exceeds the remaining budget {remaining:?}")]
    BidExceedsBudget { bid: i32, remaining: i32 },
    #[error("Bid {0:?} is negative")]
    NegativeBid(i32),
}

impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::TradeDeadlinePassed { .. } => "The trade deadline has passed.",
            Self::EmptyTrade => "A trade must include at least one team.",
            Self::TradeWithSelf(_) => "You cannot trade with yourself.",
            Self::NotOnRoster { .. } => "A traded team is not on the expected roster.",
            Self::AlreadyRostered(_) => "That MLE team is already on a roster in this league.",
            Self::BidRequired => "A bid amount is required in FAAB leagues.",
            Self::BidExceedsBudget { .. } => "Bid exceeds your remaining budget.",
            Self::NegativeBid(_) => "Bid amount cannot be negative.",
        };

        error_response(StatusCode::BAD_REQUEST, message)
    }
}
