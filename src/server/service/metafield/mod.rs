//! Metafield writes: targeted updates for one customer and bulk initialization of
//! customers that have never been given progression metafields.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::server::{
    config::Config,
    data::store::RemoteStore,
    error::{metafield::MetafieldError, request::RequestError, Error},
    model::{
        pilot::{BulkInitializeReport, BulkUpdateResult},
        progression::{keys, DEFAULT_COUNTRY, DEFAULT_FACTION, PROFILE_USERNAME_FALLBACK},
        store::{MetafieldEntry, MetafieldType, MetafieldValue},
        tier::Tier,
    },
    util::gid::customer_gid,
};

pub struct MetafieldService<'a, S: RemoteStore> {
    store: &'a S,
    config: &'a Config,
}

impl<'a, S: RemoteStore> MetafieldService<'a, S> {
    /// Creates a new instance of [`MetafieldService`]
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Writes a set of metafields to one customer in a single batched call.
    ///
    /// Each value is written with the metafield type matching its kind. The store does not
    /// write batches atomically, so when some fields are rejected the others may already
    /// be stored; the call still fails as a whole and reports every rejected field.
    ///
    /// # Arguments
    /// - `customer_id` - Numeric customer ID or full global ID
    /// - `updates` - Metafield key to new value
    ///
    /// # Returns
    /// - `Ok(String)` - Global ID of the updated customer
    /// - `Err(Error::RequestError)` - Customer ID or updates missing, or ID malformed
    /// - `Err(Error::StoreError)` - The write call itself failed
    /// - `Err(Error::MetafieldError)` - The store rejected one or more fields
    pub async fn apply_updates(
        &self,
        customer_id: &str,
        updates: &BTreeMap<String, MetafieldValue>,
    ) -> Result<String, Error> {
        let customer_id = customer_gid(customer_id)?;
        if updates.is_empty() {
            return Err(RequestError::MissingUpdates.into());
        }

        let entries: Vec<MetafieldEntry> = updates
            .iter()
            .map(|(key, value)| MetafieldEntry::from_value(key.as_str(), value))
            .collect();

        let outcome = self
            .store
            .write_attributes(&customer_id, &self.config.metafield_namespace, &entries)
            .await?;

        if !outcome.is_clean() {
            return Err(MetafieldError::FieldWrite {
                customer_id,
                errors: outcome.field_errors,
            }
            .into());
        }

        tracing::debug!(customer_id = %customer_id, fields = entries.len(), "Updated metafields");

        Ok(customer_id)
    }

    /// Gives every customer in one batch the default progression metafields.
    ///
    /// Customers that already have a `level` metafield are skipped and get no result
    /// entry. The others are written one at a time in fetch order. A customer counts as
    /// initialized when the write call succeeds; field errors returned by a successful
    /// call are logged but do not mark the customer as failed.
    ///
    /// # Returns
    /// - `Ok(BulkInitializeReport)` - Per-customer outcomes in fetch order
    /// - `Err(Error::StoreError)` - The batch could not be fetched
    pub async fn bulk_initialize(&self) -> Result<BulkInitializeReport, Error> {
        let namespace = &self.config.metafield_namespace;
        let records = self
            .store
            .fetch_batch(self.config.batch_size, namespace)
            .await?;

        let mut report = BulkInitializeReport {
            processed: records.len(),
            ..Default::default()
        };

        for record in records {
            if record.attributes.contains_key(keys::LEVEL) {
                report.skipped += 1;
                continue;
            }

            let name = record
                .display_name()
                .unwrap_or(PROFILE_USERNAME_FALLBACK)
                .to_string();

            let success = match self
                .store
                .write_attributes(&record.id, namespace, &default_attributes(&name))
                .await
            {
                // TODO: decide with the store owners whether rejected fields should mark
                // the customer as failed like `apply_updates` does.
                Ok(outcome) => {
                    if !outcome.is_clean() {
                        tracing::warn!(
                            customer_id = %record.id,
                            rejected = outcome.field_errors.len(),
                            "Store rejected default metafields; customer still counted as initialized"
                        );
                    }

                    true
                }
                Err(err) => {
                    tracing::warn!(customer_id = %record.id, "Failed to initialize customer: {}", err);

                    false
                }
            };

            report.results.push(BulkUpdateResult {
                id: record.id,
                name,
                success,
            });
        }

        tracing::info!(
            processed = report.processed,
            skipped = report.skipped,
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Bulk initialization finished"
        );

        Ok(report)
    }
}

/// Metafields written to a customer that has no progression yet.
pub fn default_attributes(username: &str) -> Vec<MetafieldEntry> {
    vec![
        MetafieldEntry::integer(keys::LEVEL, 1),
        MetafieldEntry::integer(keys::XP, 0),
        MetafieldEntry::integer(keys::VICTORIES, 0),
        MetafieldEntry::text(keys::TIER, Tier::Recruit.name()),
        MetafieldEntry::text(keys::COUNTRY, DEFAULT_COUNTRY),
        MetafieldEntry::text(keys::FACTION, DEFAULT_FACTION),
        MetafieldEntry::text(keys::USERNAME, username),
        MetafieldEntry::new(keys::ACHIEVEMENTS, "[]", MetafieldType::Json),
    ]
}
