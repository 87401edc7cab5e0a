use async_trait::async_trait;
use log::{debug, info, warn};

use crate::config::RegistryOptions;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::property::Property;
use crate::traits::contract::RegistryContract;
use crate::traits::ledger_store::{LedgerError, LedgerStore, VersionedValue, WritePrecondition};
use crate::traits::rate_source::RateSource;

/// Core registry logic: uniqueness, valuation, and movement of records
/// through the ledger seam.
///
/// Holds no record state of its own; world state is the single source of
/// truth and every operation re-reads it. Both collaborators are injected,
/// so tests bind an in-memory ledger and a fixed rate while deployments
/// bind the durable store and the live oracle.
pub struct PropertyRegistry<L, R> {
    ledger: L,
    rates: R,
    options: RegistryOptions,
}

impl<L: LedgerStore, R: RateSource> PropertyRegistry<L, R> {
    pub fn new(ledger: L, rates: R) -> Self {
        Self::with_options(ledger, rates, RegistryOptions::default())
    }

    pub fn with_options(ledger: L, rates: R, options: RegistryOptions) -> Self {
        Self {
            ledger,
            rates,
            options,
        }
    }

    /// The injected rate source, for diagnostics.
    pub fn rate_source(&self) -> &R {
        &self.rates
    }

    /// Read and decode the record under `id`, along with its ledger version.
    async fn read_record(&self, id: &str) -> RegistryResult<Option<(Property, u64)>> {
        let entry = self.ledger.get(id).await.map_err(RegistryError::Read)?;
        match entry {
            Some(VersionedValue { bytes, version }) => {
                let property = decode_record(id, &bytes)?;
                Ok(Some((property, version)))
            }
            None => Ok(None),
        }
    }

    fn create_precondition(&self) -> WritePrecondition {
        if self.options.guarded_writes {
            WritePrecondition::AbsentKey
        } else {
            WritePrecondition::None
        }
    }

    fn update_precondition(&self, version: u64) -> WritePrecondition {
        if self.options.guarded_writes {
            WritePrecondition::MatchVersion(version)
        } else {
            WritePrecondition::None
        }
    }
}

fn decode_record(key: &str, bytes: &[u8]) -> RegistryResult<Property> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::Decode {
        key: key.to_string(),
        source: e,
    })
}

fn encode_record(property: &Property) -> RegistryResult<Vec<u8>> {
    serde_json::to_vec(property).map_err(|e| RegistryError::Encode {
        id: property.id.clone(),
        source: e,
    })
}

#[async_trait]
impl<L: LedgerStore, R: RateSource> RegistryContract for PropertyRegistry<L, R> {
    async fn create_property(
        &self,
        id: &str,
        name: &str,
        area: i64,
        owner_name: &str,
        value: i64,
    ) -> RegistryResult<Property> {
        info!("Creating property {} for owner {}", id, owner_name);

        // The uniqueness check comes before everything else, the rate
        // lookup included; a duplicate id fails without a network call.
        let existing = self.ledger.get(id).await.map_err(RegistryError::Read)?;
        if existing.is_some() {
            warn!("Rejected creation: property {} already exists", id);
            return Err(RegistryError::DuplicateId(id.to_string()));
        }

        let mut property = Property {
            id: id.to_string(),
            name: name.to_string(),
            area,
            owner_name: owner_name.to_string(),
            value,
            bitcoin_value: 0.0,
        };

        let quote = self.rates.quote().await?;
        if !quote.rate.is_finite() || quote.rate <= 0.0 {
            warn!(
                "Oracle quoted unusable rate {} while creating property {}",
                quote.rate, id
            );
            return Err(RegistryError::InvalidRate(quote.rate));
        }
        property.bitcoin_value = value as f64 / quote.rate;
        debug!(
            "Valued property {} at {} bitcoin using rate {}",
            id, property.bitcoin_value, quote.rate
        );

        let bytes = encode_record(&property)?;
        match self.ledger.put(id, bytes, self.create_precondition()).await {
            Ok(()) => {
                info!(
                    "Property {} created with bitcoin value {}",
                    id, property.bitcoin_value
                );
                Ok(property)
            }
            Err(LedgerError::PreconditionFailed(_)) => {
                warn!("Property {} appeared while creating it", id);
                Err(RegistryError::DuplicateId(id.to_string()))
            }
            Err(e) => Err(RegistryError::Write(e)),
        }
    }

    async fn query_all_properties(&self) -> RegistryResult<Vec<Property>> {
        debug!("Scanning world state for all properties");
        let entries = self.ledger.scan("", "").await.map_err(RegistryError::Read)?;

        let mut properties = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            properties.push(decode_record(&key, &value.bytes)?);
        }
        debug!("Scan returned {} properties", properties.len());
        Ok(properties)
    }

    async fn query_property_by_id(&self, id: &str) -> RegistryResult<Property> {
        debug!("Looking up property {}", id);
        match self.read_record(id).await? {
            Some((property, _)) => Ok(property),
            None => Err(RegistryError::NotFound(id.to_string())),
        }
    }

    async fn transfer_property(&self, id: &str, new_owner: &str) -> RegistryResult<Property> {
        info!("Transferring property {} to {}", id, new_owner);

        let (mut property, version) = self
            .read_record(id)
            .await?
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        // Only the owner changes; the captured valuation stays as it was.
        property.owner_name = new_owner.to_string();

        let bytes = encode_record(&property)?;
        match self
            .ledger
            .put(id, bytes, self.update_precondition(version))
            .await
        {
            Ok(()) => {
                info!("Property {} now belongs to {}", id, new_owner);
                Ok(property)
            }
            Err(LedgerError::PreconditionFailed(_)) => {
                warn!("Property {} changed while transferring it", id);
                Err(RegistryError::WriteConflict(id.to_string()))
            }
            Err(e) => Err(RegistryError::Write(e)),
        }
    }
}
