//! Community hooks: feature requests and votes.
//!
//! Side-effect free. Input is validated and a deterministic receipt is
//! returned; nothing is sent or stored. A real backend would sit behind
//! these same signatures.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use webcompat_core::errors::CommunityError;
use webcompat_core::FeatureGroup;

use crate::catalog::Catalog;

const MAX_TITLE_CHARS: usize = 200;
const MAX_DESCRIPTION_CHARS: usize = 10_000;

/// A request to add a feature to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub example_code: Option<String>,
    #[serde(default)]
    pub group: Option<FeatureGroup>,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRequestReceipt {
    /// `FR-` followed by 16 hex digits, stable for a given title and description.
    pub id: String,
    pub title: String,
    pub already_in_catalog: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn delta(&self) -> i32 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteAck {
    pub feature_id: String,
    pub direction: VoteDirection,
    pub delta: i32,
}

pub fn submit_feature_request(
    catalog: &Catalog,
    request: &FeatureRequest,
) -> Result<FeatureRequestReceipt, CommunityError> {
    let title = request.title.trim();
    let description = request.description.trim();

    if title.is_empty() {
        return Err(invalid("title is empty"));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(invalid(format!("title exceeds {MAX_TITLE_CHARS} characters")));
    }
    if description.is_empty() {
        return Err(invalid("description is empty"));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(invalid(format!(
            "description exceeds {MAX_DESCRIPTION_CHARS} characters"
        )));
    }
    if let Some(url) = request.documentation_url.as_deref() {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(invalid(format!("documentation_url is not an http(s) URL: {url}")));
        }
    }

    let mut key = Vec::with_capacity(title.len() + description.len() + 1);
    key.extend_from_slice(title.as_bytes());
    key.push(0);
    key.extend_from_slice(description.as_bytes());

    let already_in_catalog = catalog
        .features()
        .iter()
        .any(|f| f.name.eq_ignore_ascii_case(title) || f.id.eq_ignore_ascii_case(title));

    let receipt = FeatureRequestReceipt {
        id: format!("FR-{:016x}", xxh3_64(&key)),
        title: title.to_string(),
        already_in_catalog,
    };
    tracing::debug!(id = %receipt.id, already_in_catalog, "feature request accepted");
    Ok(receipt)
}

pub fn vote_on_feature(
    catalog: &Catalog,
    feature_id: &str,
    direction: VoteDirection,
) -> Result<VoteAck, CommunityError> {
    if !catalog.contains(feature_id) {
        return Err(CommunityError::UnknownFeature {
            feature_id: feature_id.to_string(),
        });
    }
    tracing::debug!(feature_id, ?direction, "vote recorded");
    Ok(VoteAck {
        feature_id: feature_id.to_string(),
        direction,
        delta: direction.delta(),
    })
}

fn invalid(reason: impl Into<String>) -> CommunityError {
    CommunityError::InvalidRequest {
        reason: reason.into(),
    }
}
