//! Backend filter query building.
//!
//! Turns a parsed [`SearchQuery`] back into the canonical filter string
//! shown for saved searches, and into the query-parameter form the
//! backend search endpoint accepts.

use thiserror::Error;
use url::Url;

use crate::SearchQuery;

/// Error from [`build_search_url`].
#[derive(Debug, Error)]
pub enum SearchUrlError {
    #[error("invalid base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
}

/// Build the canonical filter string for a parsed query.
///
/// Facets come first (institution, then date range), keyword text last.
/// An empty query yields an empty string.
pub fn build_filter_query(query: &SearchQuery) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(institution) = &query.acquiring_institution {
        parts.push(format!("acq:{}", institution));
    }

    if let Some(range) = &query.date_range {
        let from = range.from.as_deref().unwrap_or("");
        match &range.to {
            Some(to) => parts.push(format!("added:{}..{}", from, to)),
            None => parts.push(format!("added:{}", from)),
        }
    }

    if let Some(keyword) = &query.keyword {
        parts.push(keyword.clone());
    }

    parts.join(" ")
}

/// Build a backend search URL from a base endpoint and a parsed query.
///
/// Appends percent-encoded parameters: `q` (keyword), `acq`,
/// `added_from`, `added_to`, `lat`, `lng`. Parameters for absent facets
/// are omitted; an empty query returns the base unchanged.
pub fn build_search_url(base: &str, query: &SearchQuery) -> Result<String, SearchUrlError> {
    let parsed_base = Url::parse(base)?;

    let mut params = Vec::new();
    if let Some(keyword) = &query.keyword {
        params.push(format!("q={}", urlencoding::encode(keyword)));
    }
    if let Some(institution) = &query.acquiring_institution {
        params.push(format!("acq={}", urlencoding::encode(institution)));
    }
    if let Some(range) = &query.date_range {
        if let Some(from) = &range.from {
            params.push(format!("added_from={}", urlencoding::encode(from)));
        }
        if let Some(to) = &range.to {
            params.push(format!("added_to={}", urlencoding::encode(to)));
        }
    }
    if let Some(coords) = &query.coordinates {
        params.push(format!("lat={}", coords.lat));
        params.push(format!("lng={}", coords.lng));
    }

    if params.is_empty() {
        return Ok(base.to_string());
    }

    let separator = if parsed_base.query().is_some() { '&' } else { '?' };
    Ok(format!("{}{}{}", base, separator, params.join("&")))
}
