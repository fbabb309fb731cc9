//! Typed progression model decoded from a customer's untyped metafields.
//!
//! The store enforces no schema on metafields, so decoding is lenient: every numeric field
//! falls back to its default when missing or unparsable, and every text field falls back to
//! its default when missing or empty. Nothing here can fail.

use std::collections::HashMap;

use crate::server::model::tier::Tier;

pub const XP_PER_LEVEL: u64 = 1000;

pub const DEFAULT_COUNTRY: &str = "Unknown";
pub const DEFAULT_FACTION: &str = "Independent";

/// Username used on the leaderboard when neither a stored username nor a display name exists.
pub const LEADERBOARD_USERNAME_FALLBACK: &str = "Anonymous";
/// Username used on a single profile when neither a stored username nor a display name exists.
pub const PROFILE_USERNAME_FALLBACK: &str = "Pilot";

/// Metafield keys read and written by the service.
pub mod keys {
    pub const USERNAME: &str = "username";
    pub const XP: &str = "xp";
    pub const LEVEL: &str = "level";
    pub const VICTORIES: &str = "victories";
    pub const TIER: &str = "tier";
    pub const COUNTRY: &str = "country";
    pub const FACTION: &str = "faction";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const AVATAR_URL: &str = "avatar_url";
    pub const CAR_IMAGE_URL: &str = "car_image_url";
}

/// Inputs to decoding that come from outside the attribute map.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    pub display_name: Option<&'a str>,
    pub username_fallback: &'a str,
}

impl<'a> DecodeContext<'a> {
    pub fn leaderboard(display_name: Option<&'a str>) -> Self {
        Self {
            display_name,
            username_fallback: LEADERBOARD_USERNAME_FALLBACK,
        }
    }

    pub fn profile(display_name: Option<&'a str>) -> Self {
        Self {
            display_name,
            username_fallback: PROFILE_USERNAME_FALLBACK,
        }
    }
}

/// A pilot's progression state, recomputed from the store on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionProfile {
    pub id: String,
    pub username: String,
    pub xp: u64,
    /// Always at least 1.
    pub level: u32,
    pub victories: u64,
    pub country: String,
    pub faction: String,
    pub tier: Tier,
}

impl ProgressionProfile {
    /// Decodes a profile from a record's metafields.
    ///
    /// A stored `level` wins whenever it parses to a positive value, even if it disagrees
    /// with `xp`, and saturates at `u32::MAX`. Otherwise the level is derived as
    /// `xp / 1000 + 1`.
    pub fn decode(
        id: impl Into<String>,
        attributes: &HashMap<String, String>,
        context: DecodeContext<'_>,
    ) -> Self {
        let xp = parse_lenient(attributes.get(keys::XP)).unwrap_or(0);
        let victories = parse_lenient(attributes.get(keys::VICTORIES)).unwrap_or(0);

        let level = parse_lenient(attributes.get(keys::LEVEL))
            .map(|level| u32::try_from(level).unwrap_or(u32::MAX))
            .filter(|level| *level >= 1)
            .unwrap_or_else(|| level_for_xp(xp));

        let username = text(attributes, keys::USERNAME)
            .or(context.display_name.filter(|name| !name.is_empty()))
            .unwrap_or(context.username_fallback)
            .to_string();

        Self {
            id: id.into(),
            username,
            xp,
            level,
            victories,
            country: text(attributes, keys::COUNTRY)
                .unwrap_or(DEFAULT_COUNTRY)
                .to_string(),
            faction: text(attributes, keys::FACTION)
                .unwrap_or(DEFAULT_FACTION)
                .to_string(),
            tier: Tier::classify(i64::from(level)),
        }
    }

    /// Whether the pilot has any progress worth ranking.
    pub fn is_active(&self) -> bool {
        self.xp > 0 || self.victories > 0 || self.level > 1
    }

    /// Total XP marking the end of the current level.
    pub fn next_level_xp(&self) -> u64 {
        u64::from(self.level) * XP_PER_LEVEL
    }

    /// Progress through the current thousand XP, in `[0, 100)`.
    pub fn xp_progress_percent(&self) -> f64 {
        (self.xp % XP_PER_LEVEL) as f64 / XP_PER_LEVEL as f64 * 100.0
    }
}

/// Level implied by an XP total when no level is stored.
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

/// Best-effort integer parsing of a metafield value.
///
/// Ignores surrounding whitespace and parses the leading run of ASCII digits, so `"12abc"`
/// reads as 12 and `"3.7"` as 3. Returns `None` when there are no leading digits (which
/// includes negative values) or the number overflows.
pub fn parse_lenient(value: Option<&String>) -> Option<u64> {
    let value = value?.trim();
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    value[..digits_end].parse().ok()
}

fn text<'a>(attributes: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    attributes
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
