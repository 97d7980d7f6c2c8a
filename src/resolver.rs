//! Carrier code resolution
//!
//! Maps a platform tracking entry onto the carrier vocabulary of the
//! external shipping API. Pure functions over the static tables in
//! [`crate::carriers`]; safe to call from any thread.

use tracing::debug;

use crate::carriers::{self, OTHER, SUPPLEMENTARY_CARRIERS, SUPPORTED_CARRIERS};
use crate::models::TrackingRecord;

/// Marker the platform stores when the merchant typed a carrier by hand
const CUSTOM: &str = "CUSTOM";

/// Substring test against an already lowercased haystack. Empty needles
/// never match.
fn contains_ignore_case(lowered: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    if needle.is_ascii() {
        let needle = needle.as_bytes();
        return lowered
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    lowered.contains(&needle.to_lowercase())
}

/// First code in `table` whose title or code appears inside `title`
pub fn find_code_by_title(title: &str, table: &[(&'static str, &'static str)]) -> Option<&'static str> {
    if title.is_empty() {
        return None;
    }
    let lowered = title.to_lowercase();
    table
        .iter()
        .find(|(code, carrier_title)| {
            contains_ignore_case(&lowered, carrier_title) || contains_ignore_case(&lowered, code)
        })
        .map(|(code, _)| *code)
}

/// Resolve the carrier code to report for a tracking entry
///
/// Non-custom identifiers are uppercased and returned as-is, without checking
/// them against the supported table. Custom entries are matched by title,
/// supplementary table first, then the full table, falling back to `OTHER`.
pub fn canonical_carrier_code(track: &impl TrackingRecord) -> String {
    let carrier_code = track.carrier_code().unwrap_or_default().to_uppercase();
    if carrier_code != CUSTOM {
        return carrier_code;
    }

    let title = track.title().unwrap_or_default();
    let code = find_code_by_title(title, SUPPLEMENTARY_CARRIERS)
        .or_else(|| find_code_by_title(title, SUPPORTED_CARRIERS));

    match code {
        Some(code) => code.to_string(),
        None => {
            debug!("No carrier matched title {:?}, using {}", title, OTHER);
            OTHER.to_string()
        }
    }
}

/// Like [`canonical_carrier_code`], but guaranteed to be a supported code
pub fn carrier_code_for_api(track: &impl TrackingRecord) -> &'static str {
    let canonical = canonical_carrier_code(track);
    carriers::supported_code(&canonical).unwrap_or_else(|| {
        debug!("Carrier code {:?} is not supported, using {}", canonical, OTHER);
        OTHER
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;

    #[test]
    fn test_known_code_passes_through_uppercased() {
        for (code, _) in SUPPORTED_CARRIERS {
            let track = Track::new(&code.to_lowercase(), "anything at all");
            assert_eq!(canonical_carrier_code(&track), *code);
            assert_eq!(carrier_code_for_api(&track), *code);
        }
    }

    #[test]
    fn test_unlisted_code_passes_through_canonical_only() {
        let track = Track::new("some_unlisted_code", "");
        assert_eq!(canonical_carrier_code(&track), "SOME_UNLISTED_CODE");
        assert_eq!(carrier_code_for_api(&Track::new("SOME_UNLISTED_CODE", "")), OTHER);
    }

    #[test]
    fn test_supplementary_long_title() {
        let track = Track::new("custom", "United Parcel Service Ground");
        assert_eq!(canonical_carrier_code(&track), "UPS");

        let track = Track::new("custom", "Federal Express Overnight");
        assert_eq!(canonical_carrier_code(&track), "FEDEX");

        let track = Track::new("Custom", "united states postal service");
        assert_eq!(canonical_carrier_code(&track), "USPS");
    }

    #[test]
    fn test_supplementary_wins_over_full_table() {
        // FEDEX_UK is in the full table, but the supplementary code hits first
        let track = Track::new("custom", "FedEx UK");
        assert_eq!(canonical_carrier_code(&track), "FEDEX");
    }

    #[test]
    fn test_first_match_in_declaration_order() {
        let track = Track::new("CUSTOM", "DHL Express (Piece ID)");
        assert_eq!(canonical_carrier_code(&track), "DHL");

        let track = Track::new("custom", "TNT Post");
        assert_eq!(canonical_carrier_code(&track), "TNT");
    }

    #[test]
    fn test_full_table_title_match() {
        let track = Track::new("custom", "Royal Mail Tracked 48");
        assert_eq!(canonical_carrier_code(&track), "ROYAL_MAIL");

        let track = Track::new("custom", "spee-dee delivery");
        assert_eq!(canonical_carrier_code(&track), "SPEE_DEE");
    }

    #[test]
    fn test_full_table_code_match() {
        let track = Track::new("custom", "shipped via canada_post");
        assert_eq!(canonical_carrier_code(&track), "CANADA_POST");
    }

    #[test]
    fn test_unknown_title_falls_back() {
        let track = Track::new("custom", "Totally Unknown Courier Inc");
        assert_eq!(canonical_carrier_code(&track), OTHER);
        assert_eq!(carrier_code_for_api(&track), OTHER);
    }

    #[test]
    fn test_empty_and_missing_title() {
        assert_eq!(canonical_carrier_code(&Track::new("custom", "")), OTHER);

        let track = Track {
            carrier_code: Some("custom".to_string()),
            ..Default::default()
        };
        assert_eq!(canonical_carrier_code(&track), OTHER);
    }

    #[test]
    fn test_missing_identifier() {
        let track = Track {
            title: Some("UPS".to_string()),
            ..Default::default()
        };
        assert_eq!(canonical_carrier_code(&track), "");
        assert_eq!(carrier_code_for_api(&track), OTHER);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let track = Track::new("custom", "Australia Post eParcel");
        let first = canonical_carrier_code(&track);
        assert_eq!(first, "AUSTRALIA_POST");
        assert_eq!(canonical_carrier_code(&track), first);
        assert_eq!(carrier_code_for_api(&track), carrier_code_for_api(&track));
    }

    #[test]
    fn test_find_code_by_title() {
        assert_eq!(find_code_by_title("", SUPPORTED_CARRIERS), None);
        assert_eq!(find_code_by_title("usps priority", SUPPLEMENTARY_CARRIERS), Some("USPS"));
        assert_eq!(find_code_by_title("Purolator", SUPPLEMENTARY_CARRIERS), None);
    }

    #[test]
    fn test_find_code_by_title_mixed_case() {
        assert_eq!(find_code_by_title("ROYAL MAIL", SUPPORTED_CARRIERS), Some("ROYAL_MAIL"));
        assert_eq!(find_code_by_title("via Purolator", SUPPORTED_CARRIERS), Some("PUROLATOR"));
        assert_eq!(find_code_by_title("sent with Canada_Post", SUPPORTED_CARRIERS), Some("CANADA_POST"));
        assert_eq!(find_code_by_title("COLIS PRIVÉ relais", SUPPORTED_CARRIERS), Some("COLIS_PRIVE"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("ups ground", "UPS"));
        assert!(!contains_ignore_case("up", "UPS"));
        assert!(!contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("hrvatska pošta", "Hrvatska Pošta"));
    }
}
