//! Region lookups for shipping and billing addresses
//!
//! Addresses reference regions by numeric id. Lookups never fail the caller:
//! an unknown region degrades to the raw id, and backend errors are logged.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::error;

/// Region info: (code, name)
pub static US_REGIONS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("1", ("AL", "Alabama"));
    m.insert("2", ("AK", "Alaska"));
    m.insert("3", ("AS", "American Samoa"));
    m.insert("4", ("AZ", "Arizona"));
    m.insert("5", ("AR", "Arkansas"));
    m.insert("6", ("AE", "Armed Forces Africa"));
    m.insert("7", ("AA", "Armed Forces Americas"));
    m.insert("8", ("AE", "Armed Forces Canada"));
    m.insert("9", ("AE", "Armed Forces Europe"));
    m.insert("10", ("AE", "Armed Forces Middle East"));
    m.insert("11", ("AP", "Armed Forces Pacific"));
    m.insert("12", ("CA", "California"));
    m.insert("13", ("CO", "Colorado"));
    m.insert("14", ("CT", "Connecticut"));
    m.insert("15", ("DE", "Delaware"));
    m.insert("16", ("DC", "District of Columbia"));
    m.insert("17", ("FM", "Federated States Of Micronesia"));
    m.insert("18", ("FL", "Florida"));
    m.insert("19", ("GA", "Georgia"));
    m.insert("20", ("GU", "Guam"));
    m.insert("21", ("HI", "Hawaii"));
    m.insert("22", ("ID", "Idaho"));
    m.insert("23", ("IL", "Illinois"));
    m.insert("24", ("IN", "Indiana"));
    m.insert("25", ("IA", "Iowa"));
    m.insert("26", ("KS", "Kansas"));
    m.insert("27", ("KY", "Kentucky"));
    m.insert("28", ("LA", "Louisiana"));
    m.insert("29", ("ME", "Maine"));
    m.insert("30", ("MH", "Marshall Islands"));
    m.insert("31", ("MD", "Maryland"));
    m.insert("32", ("MA", "Massachusetts"));
    m.insert("33", ("MI", "Michigan"));
    m.insert("34", ("MN", "Minnesota"));
    m.insert("35", ("MS", "Mississippi"));
    m.insert("36", ("MO", "Missouri"));
    m.insert("37", ("MT", "Montana"));
    m.insert("38", ("NE", "Nebraska"));
    m.insert("39", ("NV", "Nevada"));
    m.insert("40", ("NH", "New Hampshire"));
    m.insert("41", ("NJ", "New Jersey"));
    m.insert("42", ("NM", "New Mexico"));
    m.insert("43", ("NY", "New York"));
    m.insert("44", ("NC", "North Carolina"));
    m.insert("45", ("ND", "North Dakota"));
    m.insert("46", ("MP", "Northern Mariana Islands"));
    m.insert("47", ("OH", "Ohio"));
    m.insert("48", ("OK", "Oklahoma"));
    m.insert("49", ("OR", "Oregon"));
    m.insert("50", ("PW", "Palau"));
    m.insert("51", ("PA", "Pennsylvania"));
    m.insert("52", ("PR", "Puerto Rico"));
    m.insert("53", ("RI", "Rhode Island"));
    m.insert("54", ("SC", "South Carolina"));
    m.insert("55", ("SD", "South Dakota"));
    m.insert("56", ("TN", "Tennessee"));
    m.insert("57", ("TX", "Texas"));
    m.insert("58", ("UT", "Utah"));
    m.insert("59", ("VT", "Vermont"));
    m.insert("60", ("VI", "Virgin Islands"));
    m.insert("61", ("VA", "Virginia"));
    m.insert("62", ("WA", "Washington"));
    m.insert("63", ("WV", "West Virginia"));
    m.insert("64", ("WI", "Wisconsin"));
    m.insert("65", ("WY", "Wyoming"));

    m
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub region_id: String,
    pub code: String,
    pub name: String,
}

/// Source of region records
pub trait RegionDirectory: Send + Sync {
    /// `Ok(None)` when the id is unknown
    fn region(&self, region_id: &str) -> Result<Option<Region>>;
}

/// Directory backed by the built-in US region seed
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRegionDirectory;

impl RegionDirectory for StaticRegionDirectory {
    fn region(&self, region_id: &str) -> Result<Option<Region>> {
        Ok(US_REGIONS.get(region_id.trim()).map(|(code, name)| Region {
            region_id: region_id.trim().to_string(),
            code: code.to_string(),
            name: name.to_string(),
        }))
    }
}

/// Region code for an address, or `None` when it cannot be resolved
pub fn region_code(directory: &dyn RegionDirectory, region_id: &str) -> Option<String> {
    match directory.region(region_id) {
        Ok(region) => region.map(|r| r.code),
        Err(e) => {
            error!("Region lookup failed for {:?}: {}", region_id, e);
            None
        }
    }
}

/// Region code for a state id, falling back to the id itself
pub fn region_code_or_id(directory: &dyn RegionDirectory, region_id: &str) -> String {
    region_code(directory, region_id).unwrap_or_else(|| region_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenDirectory;

    impl RegionDirectory for BrokenDirectory {
        fn region(&self, _region_id: &str) -> Result<Option<Region>> {
            anyhow::bail!("directory unavailable")
        }
    }

    #[test]
    fn test_known_region() {
        let dir = StaticRegionDirectory;
        assert_eq!(region_code_or_id(&dir, "12"), "CA");
        assert_eq!(region_code(&dir, " 43 "), Some("NY".to_string()));
        assert_eq!(dir.region("57").unwrap().unwrap().name, "Texas");
    }

    #[test]
    fn test_unknown_region_falls_back_to_id() {
        let dir = StaticRegionDirectory;
        assert_eq!(region_code_or_id(&dir, "999"), "999");
        assert_eq!(region_code(&dir, "999"), None);
    }

    #[test]
    fn test_lookup_error_degrades() {
        assert_eq!(region_code_or_id(&BrokenDirectory, "12"), "12");
        assert_eq!(region_code(&BrokenDirectory, "12"), None);
    }

    #[test]
    fn test_seed_size() {
        assert_eq!(US_REGIONS.len(), 65);
    }
}
