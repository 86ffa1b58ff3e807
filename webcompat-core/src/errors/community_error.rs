//! Community hook errors (feature requests and votes).

use super::error_code::{self, CompatErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CommunityError {
    #[error("Invalid feature request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Unknown feature id: {feature_id}")]
    UnknownFeature { feature_id: String },
}

impl CompatErrorCode for CommunityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => error_code::COMMUNITY_INVALID_REQUEST,
            Self::UnknownFeature { .. } => error_code::COMMUNITY_UNKNOWN_FEATURE,
        }
    }
}
