use async_trait::async_trait;

use crate::errors::RegistryResult;
use crate::models::property::Property;

/// The operations a hosting runtime may invoke against the registry.
///
/// Implementors own validation and ledger access; callers only marshal
/// arguments. Every failure comes back as a typed error whose reason
/// string is forwarded to the caller unchanged.
#[async_trait]
pub trait RegistryContract: Send + Sync {
    /// Register a new parcel under `id` and value it in bitcoin at the
    /// current exchange rate. Rejects ids that already hold a record.
    async fn create_property(
        &self,
        id: &str,
        name: &str,
        area: i64,
        owner_name: &str,
        value: i64,
    ) -> RegistryResult<Property>;

    /// Every record currently in world state, in ledger iteration order.
    async fn query_all_properties(&self) -> RegistryResult<Vec<Property>>;

    /// The record stored under `id`.
    async fn query_property_by_id(&self, id: &str) -> RegistryResult<Property>;

    /// Reassign ownership of an existing parcel and return the updated
    /// record. Everything except the owner is left untouched.
    async fn transfer_property(&self, id: &str, new_owner: &str) -> RegistryResult<Property>;
}
