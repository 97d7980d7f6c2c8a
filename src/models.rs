use serde::{Deserialize, Serialize};

/// Read-only view of a shipment tracking entry
///
/// Both fields may be missing on platform records; the resolver treats a
/// missing value the same as an empty one.
pub trait TrackingRecord {
    /// Raw carrier identifier, e.g. `ups` or `custom`
    fn carrier_code(&self) -> Option<&str>;
    /// Free-text carrier title entered by the merchant
    fn title(&self) -> Option<&str>;
}

/// Owned tracking entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub carrier_code: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub track_number: Option<String>,
}

impl Track {
    pub fn new(carrier_code: &str, title: &str) -> Self {
        Self {
            carrier_code: Some(carrier_code.to_string()),
            title: Some(title.to_string()),
            track_number: None,
        }
    }
}

impl TrackingRecord for Track {
    fn carrier_code(&self) -> Option<&str> {
        self.carrier_code.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Raw row from a tracking export CSV
#[derive(Debug, Deserialize)]
pub struct TrackCsvRecord {
    pub order_id: String,
    pub track_number: Option<String>,
    pub carrier_code: Option<String>,
    pub title: Option<String>,
}

impl TrackCsvRecord {
    pub fn to_track(&self) -> Track {
        Track {
            carrier_code: self.carrier_code.clone(),
            title: self.title.clone(),
            track_number: self.track_number.clone(),
        }
    }
}

/// Output row with resolved codes appended
#[derive(Debug, Serialize)]
pub struct ResolvedTrackRecord {
    pub order_id: String,
    pub track_number: Option<String>,
    pub carrier_code: Option<String>,
    pub title: Option<String>,
    pub canonical_code: String,
    pub api_code: &'static str,
}

/// Customer gender as stored by the platform (attribute option ids)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Gender {
    Male,
    Female,
    NotSpecified,
}

impl Gender {
    /// Option id 0 is the empty option and maps to nothing
    pub fn from_option_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            3 => Some(Gender::NotSpecified),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NotSpecified => "Not Specified",
        }
    }
}

/// Billing address snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    pub region_code: Option<String>,
    pub country_id: Option<String>,
}

/// Logged-in customer snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dob: Option<String>,
    /// Gender attribute option id
    pub gender: Option<u8>,
    pub default_billing: Option<Address>,
}

/// Product type id for configurable (parent) products
pub const CONFIGURABLE_TYPE: &str = "configurable";

/// Visible cart or order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// SKU or entity id, whichever the catalog feed is keyed on
    pub content_id: String,
    #[serde(default = "default_product_type")]
    pub product_type: String,
    pub qty: f64,
    pub final_price: f64,
}

fn default_product_type() -> String {
    "simple".to_string()
}

/// Active cart (quote) snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub subtotal: Option<f64>,
    pub currency: Option<String>,
}

/// Last placed order snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_email: Option<String>,
    pub customer_firstname: Option<String>,
    pub customer_lastname: Option<String>,
    pub customer_dob: Option<String>,
    pub customer_gender: Option<u8>,
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub subtotal: Option<f64>,
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;

    #[test]
    fn test_csv_empty_fields_are_none() {
        let data = "order_id,track_number,carrier_code,title\n100,1Z999,custom,\n101,,ups,UPS\n";
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data.as_bytes());
        let records: Vec<TrackCsvRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        let first = records[0].to_track();
        assert_eq!(first.carrier_code(), Some("custom"));
        assert_eq!(first.title(), None);
        assert_eq!(records[1].track_number, None);
    }

    #[test]
    fn test_gender_option_ids() {
        assert_eq!(Gender::from_option_id(0), None);
        assert_eq!(Gender::from_option_id(2).map(|g| g.label()), Some("Female"));
        assert_eq!(Gender::from_option_id(9), None);
    }

    #[test]
    fn test_order_snapshot_defaults() {
        let order: OrderSnapshot = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert!(order.items.is_empty());
        assert_eq!(order.subtotal, None);

        let item: LineItem =
            serde_json::from_str(r#"{"content_id": "SKU-1", "qty": 2, "final_price": 9.5}"#).unwrap();
        assert_eq!(item.product_type, "simple");
    }
}
