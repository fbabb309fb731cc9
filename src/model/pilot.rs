use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    /// 1-based position after sorting by XP
    pub rank: u32,
    pub id: String,
    pub username: String,
    pub xp: u64,
    pub level: u32,
    pub victories: u64,
    pub country: String,
    pub faction: String,
    pub tier: String,
    pub tier_number: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardDto {
    pub leaderboard: Vec<LeaderboardEntryDto>,
    pub total: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub username: String,
    pub xp: u64,
    pub level: u32,
    pub victories: u64,
    pub country: String,
    pub faction: String,
    pub tier: String,
    pub tier_number: u8,
    pub avatar_url: Option<String>,
    pub car_image_url: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub achievements: Vec<serde_json::Value>,
    /// Total XP at which the pilot reaches the next level
    pub next_level_xp: u64,
    /// Progress through the current thousand XP, from 0 up to but excluding 100
    pub xp_progress_percent: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ProfileQuery {
    /// Customer ID, either numeric or a full `gid://shopify/Customer/...` ID
    pub customer_id: Option<String>,
}
