//! Customer store abstraction.
//!
//! Services only need three capabilities from the store: fetch a bounded batch of
//! customers with their namespaced metafields, fetch one customer, and set several
//! metafields on one customer in a single call. [`RemoteStore`] captures exactly that so
//! services can run against [`client::StoreClient`] in production and an in-memory store in
//! unit tests.

pub mod client;
pub mod query;

use std::future::Future;

use crate::server::{
    error::store::StoreError,
    model::store::{MetafieldEntry, RawRecord, WriteOutcome},
};

pub trait RemoteStore: Send + Sync {
    /// Fetches up to `count` customers with their metafields in `namespace`.
    ///
    /// The returned order is the store's and is treated as stable for ranking ties.
    fn fetch_batch(
        &self,
        count: u32,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<RawRecord>, StoreError>> + Send;

    /// Fetches a single customer by global ID.
    ///
    /// # Returns
    /// - `Ok(RawRecord)` - Customer found
    /// - `Err(StoreError::CustomerNotFound)` - No customer with this ID
    /// - `Err(StoreError)` - Any other request failure
    fn fetch_one(
        &self,
        id: &str,
        namespace: &str,
    ) -> impl Future<Output = Result<RawRecord, StoreError>> + Send;

    /// Sets every entry on the customer in one batched call.
    ///
    /// An `Ok` result means the call reached the store; entries it rejected are listed in
    /// [`WriteOutcome::field_errors`] and the remaining entries may or may not have been
    /// written depending on the store.
    fn write_attributes(
        &self,
        record_id: &str,
        namespace: &str,
        entries: &[MetafieldEntry],
    ) -> impl Future<Output = Result<WriteOutcome, StoreError>> + Send;
}
