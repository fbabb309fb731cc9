//! Leaderboard aggregation.
//!
//! Builds the ranked leaderboard from one batch of customers: decode every record, drop
//! pilots without any progress, sort by XP descending and number the rows.

#[cfg(test)]
mod tests;

use crate::server::{
    config::Config,
    data::store::RemoteStore,
    error::Error,
    model::{
        pilot::LeaderboardEntry,
        progression::{DecodeContext, ProgressionProfile},
        store::RawRecord,
    },
};

pub struct LeaderboardService<'a, S: RemoteStore> {
    store: &'a S,
    config: &'a Config,
}

impl<'a, S: RemoteStore> LeaderboardService<'a, S> {
    /// Creates a new instance of [`LeaderboardService`]
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Fetches one batch of customers and ranks them.
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Ranked entries, rank 1 first
    /// - `Err(Error::StoreError)` - The batch could not be fetched; no partial leaderboard
    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, Error> {
        let records = self
            .store
            .fetch_batch(self.config.batch_size, &self.config.metafield_namespace)
            .await?;

        let fetched = records.len();
        let entries = aggregate(records);

        tracing::debug!(fetched, ranked = entries.len(), "Built leaderboard");

        Ok(entries)
    }
}

/// Decodes, filters and ranks a batch of records.
///
/// Profiles with no XP, no victories and level 1 are left out. The sort is stable, so
/// pilots with equal XP keep the order the store returned them in, and ranks are
/// positional: tied pilots still get consecutive ranks.
pub fn aggregate(records: Vec<RawRecord>) -> Vec<LeaderboardEntry> {
    let mut active: Vec<_> = records
        .into_iter()
        .map(|record| {
            let profile = ProgressionProfile::decode(
                record.id.clone(),
                &record.attributes,
                DecodeContext::leaderboard(record.display_name()),
            );

            (profile, record.created_at)
        })
        .filter(|(profile, _)| profile.is_active())
        .collect();

    active.sort_by(|(a, _), (b, _)| b.xp.cmp(&a.xp));

    active
        .into_iter()
        .zip(1u32..)
        .map(|((profile, created_at), rank)| LeaderboardEntry {
            rank,
            profile,
            created_at,
        })
        .collect()
}
