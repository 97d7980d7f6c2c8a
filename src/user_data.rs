//! Customer match keys for the conversions API
//!
//! PII is normalised to lowercase and SHA-256 hashed before it leaves the
//! store. Only `external_id` is sent in the clear.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::models::{Address, CustomerProfile, Gender, OrderSnapshot};

/// Match key name -> value, ready to serialize
pub type UserData = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    ExternalId,
    Email,
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    ZipCode,
    City,
    Phone,
    State,
    Country,
}

impl MatchKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKey::ExternalId => "external_id",
            MatchKey::Email => "em",
            MatchKey::FirstName => "fn",
            MatchKey::LastName => "ln",
            MatchKey::DateOfBirth => "db",
            MatchKey::Gender => "ge",
            MatchKey::ZipCode => "zp",
            MatchKey::City => "ct",
            MatchKey::Phone => "ph",
            MatchKey::State => "st",
            MatchKey::Country => "country",
        }
    }
}

/// Lowercase, SHA-256, hex
pub fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.to_lowercase().as_bytes());
    hex::encode(hasher.finalize())
}

/// Collects keys, dropping absent and empty values
// The platform payload sends sha256("") for missing fields; those keys are omitted here.
#[derive(Default)]
struct UserDataBuilder {
    data: UserData,
}

impl UserDataBuilder {
    fn plain(&mut self, key: MatchKey, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.data.insert(key.as_str(), v.to_string());
        }
        self
    }

    fn hashed(&mut self, key: MatchKey, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.data.insert(key.as_str(), hash_value(v));
        }
        self
    }

    fn gender(&mut self, option_id: Option<u8>) -> &mut Self {
        let label = option_id.and_then(Gender::from_option_id).map(|g| g.label());
        self.hashed(MatchKey::Gender, label)
    }

    fn address(&mut self, address: Option<&Address>) -> &mut Self {
        if let Some(a) = address {
            self.hashed(MatchKey::ZipCode, a.postcode.as_deref())
                .hashed(MatchKey::City, a.city.as_deref())
                .hashed(MatchKey::Phone, a.telephone.as_deref())
                .hashed(MatchKey::State, a.region_code.as_deref())
                .hashed(MatchKey::Country, a.country_id.as_deref());
        }
        self
    }

    fn build(self) -> UserData {
        self.data
    }
}

/// Match keys from the customer fields of the last order
pub fn user_data_from_order(order: Option<&OrderSnapshot>) -> Option<UserData> {
    let order = order?;
    let mut builder = UserDataBuilder::default();
    builder
        .plain(MatchKey::ExternalId, order.customer_id.as_deref())
        .hashed(MatchKey::Email, order.customer_email.as_deref())
        .hashed(MatchKey::FirstName, order.customer_firstname.as_deref())
        .hashed(MatchKey::LastName, order.customer_lastname.as_deref())
        .hashed(MatchKey::DateOfBirth, order.customer_dob.as_deref())
        .gender(order.customer_gender)
        .address(order.billing_address.as_ref());
    Some(builder.build())
}

/// Match keys for the logged-in customer, `None` for guests
pub fn user_data_from_customer(customer: Option<&CustomerProfile>) -> Option<UserData> {
    let customer = customer?;
    let mut builder = UserDataBuilder::default();
    builder
        .plain(MatchKey::ExternalId, customer.id.as_deref())
        .hashed(MatchKey::Email, customer.email.as_deref())
        .hashed(MatchKey::FirstName, customer.firstname.as_deref())
        .hashed(MatchKey::LastName, customer.lastname.as_deref())
        .hashed(MatchKey::DateOfBirth, customer.dob.as_deref())
        .gender(customer.gender)
        .address(customer.default_billing.as_ref());
    Some(builder.build())
}
