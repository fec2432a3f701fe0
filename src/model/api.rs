use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a mutation succeeds, wrapping the created or updated resource
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto<T> {
    /// Always `true`
    pub success: bool,
    /// The created or updated resource
    pub data: T,
}

impl<T> SuccessDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
