//! Plant and seed records with closed trait enumerations
//!
//! The server encodes plant trait fields as small integers. Each trait is a
//! closed enum here: a discriminant outside the mapping fails
//! deserialization instead of smuggling an arbitrary number through the
//! client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_trait_discriminants;

/// Flowering habit of a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Flowering {
    NonFlowering,
    SingleBloom,
    RepeatBloom,
}

impl_trait_discriminants!(Flowering {
    NonFlowering => 0,
    SingleBloom => 1,
    RepeatBloom => 2,
});

/// Fruit-bearing behaviour of a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FruitBearing {
    None,
    Seasonal,
    Everbearing,
}

impl_trait_discriminants!(FruitBearing {
    None => 0,
    Seasonal => 1,
    Everbearing => 2,
});

/// Reproduction method of a plant or seed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Reproduction {
    Seeds,
    Cuttings,
    Division,
    Spores,
}

impl_trait_discriminants!(Reproduction {
    Seeds => 0,
    Cuttings => 1,
    Division => 2,
    Spores => 3,
});

/// Germination viability grade of a seed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Viability {
    Low,
    Medium,
    High,
}

impl_trait_discriminants!(Viability {
    Low => 0,
    Medium => 1,
    High => 2,
});

/// Tracked plant record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flowering: Option<Flowering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruit_bearing: Option<FruitBearing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reproduction: Option<Reproduction>,
    /// Owning client account, if the plant is assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planted_at: Option<DateTime<Utc>>,
}

/// Seed batch record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viability: Option<Viability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reproduction: Option<Reproduction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvested_at: Option<DateTime<Utc>>,
}
