use serde::{Deserialize, Serialize};

/// A registered parcel as stored in world state.
///
/// The serialized field names are part of the on-ledger record format and
/// must not drift: external readers parse the raw JSON. `BitcoinValue`
/// keeps its upstream casing, and records written before valuation existed
/// may omit it entirely, so it decodes to zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    /// Surface area in square meters.
    pub area: i64,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    /// Market value in US dollars.
    pub value: i64,
    /// Value expressed in bitcoin at registration time. Captured once and
    /// never recomputed, so it reflects the rate of that moment.
    #[serde(rename = "BitcoinValue", default)]
    pub bitcoin_value: f64,
}
