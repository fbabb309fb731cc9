use chrono::{DateTime, Utc};

use crate::{
    model::{
        metafield::BulkUpdateResultDto,
        pilot::{LeaderboardEntryDto, ProfileDto},
    },
    server::model::progression::ProgressionProfile,
};

/// A ranked leaderboard row. Recomputed per request and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub profile: ProgressionProfile,
    pub created_at: DateTime<Utc>,
}

impl From<LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntry) -> Self {
        let profile = entry.profile;

        LeaderboardEntryDto {
            rank: entry.rank,
            tier: profile.tier.name().to_string(),
            tier_number: profile.tier.number(),
            id: profile.id,
            username: profile.username,
            xp: profile.xp,
            level: profile.level,
            victories: profile.victories,
            country: profile.country,
            faction: profile.faction,
            created_at: entry.created_at,
        }
    }
}

/// A single pilot's profile with the extras only shown on the profile view.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotProfile {
    pub profile: ProgressionProfile,
    pub avatar_url: Option<String>,
    pub car_image_url: Option<String>,
    pub achievements: Vec<serde_json::Value>,
}

impl From<PilotProfile> for ProfileDto {
    fn from(pilot: PilotProfile) -> Self {
        let next_level_xp = pilot.profile.next_level_xp();
        let xp_progress_percent = pilot.profile.xp_progress_percent();
        let profile = pilot.profile;

        ProfileDto {
            tier: profile.tier.name().to_string(),
            tier_number: profile.tier.number(),
            id: profile.id,
            username: profile.username,
            xp: profile.xp,
            level: profile.level,
            victories: profile.victories,
            country: profile.country,
            faction: profile.faction,
            avatar_url: pilot.avatar_url,
            car_image_url: pilot.car_image_url,
            achievements: pilot.achievements,
            next_level_xp,
            xp_progress_percent,
        }
    }
}

/// Outcome of initializing one customer during a bulk run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkUpdateResult {
    pub id: String,
    pub name: String,
    pub success: bool,
}

impl From<BulkUpdateResult> for BulkUpdateResultDto {
    fn from(result: BulkUpdateResult) -> Self {
        BulkUpdateResultDto {
            id: result.id,
            name: result.name,
            success: result.success,
        }
    }
}

/// Summary of a bulk initialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkInitializeReport {
    /// Records fetched from the store
    pub processed: usize,
    /// Records left untouched because they already had a level
    pub skipped: usize,
    /// One result per initialized record, in fetch order
    pub results: Vec<BulkUpdateResult>,
}

impl BulkInitializeReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}
