//! paymap-search: search box query parsing for the paymap suite
//!
//! This library turns free-text search input into structured facets:
//! - Coordinate pairs for map jumps
//! - Acquiring institution filters (`acq:` / `inst:`)
//! - Added-date filters (`added:` / `date:` / `time:`), with `..` ranges
//! - Leftover keyword text
//!
//! It also builds the canonical filter string and the backend search URL
//! from a parsed query.

pub mod dates;
pub mod query;
pub mod query_builder;

pub use dates::normalize_date;
pub use query::{parse, DateRange, SearchQuery};
pub use query_builder::{build_filter_query, build_search_url, SearchUrlError};
