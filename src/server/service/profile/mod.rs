//! Single pilot profile view.

#[cfg(test)]
mod tests;

use crate::server::{
    config::Config,
    data::store::RemoteStore,
    error::{profile::ProfileError, Error},
    model::{
        pilot::PilotProfile,
        progression::{keys, DecodeContext, ProgressionProfile},
        store::RawRecord,
    },
    util::gid::customer_gid,
};

pub struct ProfileService<'a, S: RemoteStore> {
    store: &'a S,
    config: &'a Config,
}

impl<'a, S: RemoteStore> ProfileService<'a, S> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Fetches one customer and decodes their profile.
    ///
    /// Numeric and text metafields decode leniently, but a non-empty `achievements`
    /// metafield that is not a JSON array is treated as corrupted data and fails the call.
    ///
    /// # Arguments
    /// - `customer_id` - Numeric customer ID or full global ID
    ///
    /// # Returns
    /// - `Ok(PilotProfile)` - Decoded profile
    /// - `Err(Error::RequestError)` - Customer ID missing or malformed
    /// - `Err(Error::StoreError(StoreError::CustomerNotFound))` - No such customer
    /// - `Err(Error::StoreError)` - Store request failed
    /// - `Err(Error::ProfileError)` - Stored achievements are not valid JSON
    pub async fn get_profile(&self, customer_id: &str) -> Result<PilotProfile, Error> {
        let customer_id = customer_gid(customer_id)?;

        let record = self
            .store
            .fetch_one(&customer_id, &self.config.metafield_namespace)
            .await?;

        let profile = ProgressionProfile::decode(
            record.id.clone(),
            &record.attributes,
            DecodeContext::profile(record.display_name()),
        );
        let achievements = decode_achievements(&record)?;

        Ok(PilotProfile {
            profile,
            avatar_url: optional_text(&record, keys::AVATAR_URL),
            car_image_url: optional_text(&record, keys::CAR_IMAGE_URL),
            achievements,
        })
    }
}

fn decode_achievements(record: &RawRecord) -> Result<Vec<serde_json::Value>, ProfileError> {
    let Some(raw) = record
        .attributes
        .get(keys::ACHIEVEMENTS)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
    else {
        return Ok(Vec::new());
    };

    serde_json::from_str(raw).map_err(|source| ProfileError::MalformedAchievements {
        customer_id: record.id.clone(),
        source,
    })
}

fn optional_text(record: &RawRecord, key: &str) -> Option<String> {
    record
        .attributes
        .get(key)
        .filter(|value| !value.is_empty())
        .cloned()
}
