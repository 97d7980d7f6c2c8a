//! Shared business logic for the REST handlers

use serde::{Deserialize, Serialize};

use crate::carriers::{self, SUPPORTED_CARRIERS};
use crate::custom_data::{conversion_payload, ConversionPayload};
use crate::models::{CustomerProfile, OrderSnapshot, Track};
use crate::regions::{region_code_or_id, RegionDirectory, StaticRegionDirectory};
use crate::resolver::{canonical_carrier_code, carrier_code_for_api};
use crate::user_data::{user_data_from_customer, UserData};

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierEntry {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub carrier_code: Option<String>,
    pub title: Option<String>,
    pub canonical_code: String,
    pub api_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionLookup {
    pub region_id: String,
    pub code: String,
}

// ============================================================================
// Service
// ============================================================================

pub struct SyncService {
    regions: Box<dyn RegionDirectory>,
}

impl Default for SyncService {
    fn default() -> Self {
        Self::new(Box::new(StaticRegionDirectory))
    }
}

impl SyncService {
    pub fn new(regions: Box<dyn RegionDirectory>) -> Self {
        Self { regions }
    }

    /// Supported carriers in declaration order
    pub fn carriers(&self, limit: Option<usize>) -> Vec<CarrierEntry> {
        SUPPORTED_CARRIERS
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(code, title)| CarrierEntry {
                code: code.to_string(),
                title: title.to_string(),
            })
            .collect()
    }

    pub fn carrier(&self, code: &str) -> Option<CarrierEntry> {
        let code = code.to_uppercase();
        carriers::carrier_title(&code).map(|title| CarrierEntry {
            code,
            title: title.to_string(),
        })
    }

    pub fn resolve(&self, track: Track) -> Resolution {
        let canonical_code = canonical_carrier_code(&track);
        let api_code = carrier_code_for_api(&track).to_string();
        Resolution {
            carrier_code: track.carrier_code,
            title: track.title,
            canonical_code,
            api_code,
        }
    }

    pub fn region(&self, region_id: &str) -> RegionLookup {
        RegionLookup {
            region_id: region_id.to_string(),
            code: region_code_or_id(self.regions.as_ref(), region_id),
        }
    }

    pub fn order_payload(&self, order: &OrderSnapshot) -> Option<ConversionPayload> {
        conversion_payload(Some(order))
    }

    pub fn session_user_data(&self, customer: &CustomerProfile) -> Option<UserData> {
        user_data_from_customer(Some(customer))
    }
}
