//! Search box input parsing.
//!
//! Classifies free-text search input into structured facets that the map
//! view and the backend filter call consume.
//!
//! # Syntax
//!
//! ```text
//! acq:Chase added:2024-01-01..2024-02-01 coffee shop
//! 40.7128,-74.0060
//! ```
//!
//! Tokens:
//! - `lat,lng` decimal pair anywhere in the input — map jump target
//! - `acq:NAME`, `inst:NAME` (or localized `收单:` / `机构:`) — acquiring
//!   institution filter
//! - `added:DATE`, `date:DATE`, `time:DATE` (or `添加:` / `日期:`), with an
//!   optional `..` range — added-date filter
//! - Everything else — keyword text

use lazy_static::lazy_static;
use paymap_domain::Coordinates;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dates::normalize_date;

lazy_static! {
    static ref COORDINATE_PATTERN: Regex =
        Regex::new(r"(-?\d{1,3}\.\d+)\s*,\s*(-?\d{1,3}\.\d+)").unwrap();
}

/// Keys that set the acquiring institution facet.
const INSTITUTION_KEYS: [&str; 4] = ["acq", "inst", "收单", "机构"];

/// Keys that set the added-date facet.
const DATE_KEYS: [&str; 5] = ["added", "date", "time", "添加", "日期"];

/// An added-date filter. Either bound may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound, RFC 3339
    pub from: Option<String>,
    /// Inclusive upper bound, RFC 3339
    pub to: Option<String>,
}

/// A parsed search box input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The trimmed original input
    pub raw: String,
    /// Free text left over after facet extraction
    pub keyword: Option<String>,
    /// Map jump target
    pub coordinates: Option<Coordinates>,
    /// Acquiring institution filter
    pub acquiring_institution: Option<String>,
    /// Added-date filter
    pub date_range: Option<DateRange>,
}

impl SearchQuery {
    /// Whether the query carries no facets and no keyword.
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.coordinates.is_none()
            && self.acquiring_institution.is_none()
            && self.date_range.is_none()
    }
}

/// Parse a search box input into structured facets.
///
/// Total function: any input, including empty or malformed text, yields a
/// valid query. Unrecognized `key:value` tokens and out-of-bounds
/// coordinates degrade to plain keyword text instead of erroring.
///
/// Coordinate text is deliberately left in the keyword stream: a pure
/// coordinate query yields both `coordinates` and an identical `keyword`,
/// matching how the map view treats the input.
///
/// # Examples
/// ```
/// use paymap_search::parse;
/// let query = parse("acq:Chase starbucks");
/// assert_eq!(query.acquiring_institution.as_deref(), Some("Chase"));
/// assert_eq!(query.keyword.as_deref(), Some("starbucks"));
/// ```
pub fn parse(raw: &str) -> SearchQuery {
    let trimmed = raw.trim();
    let mut query = SearchQuery {
        raw: trimmed.to_string(),
        ..Default::default()
    };
    if trimmed.is_empty() {
        return query;
    }

    // Coordinate facet: first decimal pair anywhere in the input.
    // Out-of-bounds pairs are discarded, not errors.
    if let Some(caps) = COORDINATE_PATTERN.captures(trimmed) {
        query.coordinates = Coordinates::parse(&caps[1], &caps[2]);
    }

    let mut keyword_parts: Vec<&str> = Vec::new();

    for token in trimmed.split_whitespace() {
        match token.split_once(':') {
            Some((key, value)) => {
                let key = key.to_lowercase();
                if INSTITUTION_KEYS.contains(&key.as_str()) {
                    // Last non-empty occurrence wins
                    if !value.is_empty() {
                        query.acquiring_institution = Some(value.to_string());
                    }
                } else if DATE_KEYS.contains(&key.as_str()) {
                    // A later valid range fully replaces an earlier one
                    if let Some(range) = parse_date_value(value) {
                        query.date_range = Some(range);
                    }
                } else {
                    // Unrecognized key: the whole token is keyword text
                    keyword_parts.push(token);
                }
            }
            None => keyword_parts.push(token),
        }
    }

    let keyword = keyword_parts.join(" ");
    if !keyword.is_empty() {
        query.keyword = Some(keyword);
    }

    query
}

/// Parse a date facet value, `DATE` or `DATE..DATE`.
///
/// Each half normalizes independently; an unparseable half is dropped.
/// Returns `None` when no half yields a valid date.
fn parse_date_value(value: &str) -> Option<DateRange> {
    let (from, to) = match value.split_once("..") {
        Some((start, end)) => (normalize_date(start), normalize_date(end)),
        None => (normalize_date(value), None),
    };

    if from.is_none() && to.is_none() {
        return None;
    }
    Some(DateRange { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let query = parse("");
        assert_eq!(query.raw, "");
        assert!(query.is_empty());
    }

    #[test]
    fn whitespace_only_input() {
        let query = parse("   \t  ");
        assert_eq!(query.raw, "");
        assert!(query.is_empty());
    }

    #[test]
    fn raw_is_trimmed_input() {
        let query = parse("  coffee shop  ");
        assert_eq!(query.raw, "coffee shop");
    }

    #[test]
    fn plain_keyword() {
        let query = parse("coffee shop");
        assert_eq!(query.keyword.as_deref(), Some("coffee shop"));
        assert!(query.coordinates.is_none());
    }

    #[test]
    fn coordinate_pair() {
        let query = parse("40.7128,-74.0060");
        assert_eq!(
            query.coordinates,
            Some(Coordinates::new(40.7128, -74.006))
        );
    }

    #[test]
    fn coordinate_pair_with_spaces() {
        let query = parse("40.7128 , -74.0060");
        assert_eq!(
            query.coordinates,
            Some(Coordinates::new(40.7128, -74.006))
        );
    }

    #[test]
    fn coordinate_text_stays_in_keyword() {
        // Matched coordinate text is not stripped from the keyword stream.
        let query = parse("40.7128,-74.0060");
        assert_eq!(query.keyword.as_deref(), Some("40.7128,-74.0060"));
    }

    #[test]
    fn out_of_bounds_coordinates_become_keyword() {
        let query = parse("91.0,200.0");
        assert!(query.coordinates.is_none());
        assert_eq!(query.keyword.as_deref(), Some("91.0,200.0"));
    }

    #[test]
    fn institution_filter() {
        let query = parse("acq:Chase");
        assert_eq!(query.acquiring_institution.as_deref(), Some("Chase"));
        assert!(query.keyword.is_none());
    }

    #[test]
    fn institution_key_is_case_insensitive() {
        let query = parse("ACQ:Chase");
        assert_eq!(query.acquiring_institution.as_deref(), Some("Chase"));
    }

    #[test]
    fn institution_value_case_preserved() {
        let query = parse("inst:CitiBank");
        assert_eq!(query.acquiring_institution.as_deref(), Some("CitiBank"));
    }

    #[test]
    fn institution_localized_key() {
        let query = parse("收单:银联商务");
        assert_eq!(query.acquiring_institution.as_deref(), Some("银联商务"));
    }

    #[test]
    fn institution_empty_value_ignored() {
        let query = parse("acq: coffee");
        assert!(query.acquiring_institution.is_none());
        assert_eq!(query.keyword.as_deref(), Some("coffee"));
    }

    #[test]
    fn institution_last_occurrence_wins() {
        let query = parse("acq:Chase acq:Citi");
        assert_eq!(query.acquiring_institution.as_deref(), Some("Citi"));
    }

    #[test]
    fn date_single_value() {
        let query = parse("added:2024-01-01");
        let range = query.date_range.unwrap();
        assert_eq!(range.from.as_deref(), Some("2024-01-01T00:00:00+00:00"));
        assert!(range.to.is_none());
    }

    #[test]
    fn date_range_value() {
        let query = parse("date:2024-01-01..2024-02-01");
        let range = query.date_range.unwrap();
        assert_eq!(range.from.as_deref(), Some("2024-01-01T00:00:00+00:00"));
        assert_eq!(range.to.as_deref(), Some("2024-02-01T00:00:00+00:00"));
    }

    #[test]
    fn date_range_bad_half_dropped() {
        let query = parse("added:notadate..2024-02-01");
        let range = query.date_range.unwrap();
        assert!(range.from.is_none());
        assert_eq!(range.to.as_deref(), Some("2024-02-01T00:00:00+00:00"));
    }

    #[test]
    fn date_unparseable_not_set() {
        let query = parse("added:soon");
        assert!(query.date_range.is_none());
    }

    #[test]
    fn date_later_occurrence_replaces() {
        let query = parse("added:2024-01-01..2024-02-01 added:2025-03-05");
        let range = query.date_range.unwrap();
        assert_eq!(range.from.as_deref(), Some("2025-03-05T00:00:00+00:00"));
        assert!(range.to.is_none());
    }

    #[test]
    fn unrecognized_key_kept_whole() {
        let query = parse("fee:0.38 starbucks");
        assert_eq!(query.keyword.as_deref(), Some("fee:0.38 starbucks"));
    }

    #[test]
    fn combined_facets() {
        let query = parse("acq:Chase date:2024-01-01..2024-02-01 starbucks");
        assert_eq!(query.acquiring_institution.as_deref(), Some("Chase"));
        let range = query.date_range.as_ref().unwrap();
        assert_eq!(range.from.as_deref(), Some("2024-01-01T00:00:00+00:00"));
        assert_eq!(range.to.as_deref(), Some("2024-02-01T00:00:00+00:00"));
        assert_eq!(query.keyword.as_deref(), Some("starbucks"));
    }

    #[test]
    fn serde_round_trip() {
        let query = parse("acq:Chase 40.7128,-74.0060 coffee");
        let json = serde_json::to_string(&query).unwrap();
        let back: SearchQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(query, back);
    }

    #[test]
    fn keyword_order_preserved() {
        let query = parse("night acq:Chase market stall");
        assert_eq!(query.keyword.as_deref(), Some("night market stall"));
    }
}
