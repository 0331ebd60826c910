//! Autopilot Track Library
//!
//! Reconstructs a flight track from a newline-delimited telemetry feed and reports
//! how far the aircraft travelled with the autopilot engaged, disengaged, or in a
//! not-yet-known state.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Analyze a feed already in memory:
//! ```rust
//! use autopilot_track::{analyze_telemetry, DistanceBucket, DistanceSummary};
//!
//! let feed = concat!(
//!     "{\"ts\": 1, \"control_switch_on\": true}\n",
//!     "{\"ts\": 2, \"geo\": {\"lat\": 10.0, \"lon\": 10.0}}\n",
//!     "{\"ts\": 3, \"geo\": {\"lat\": 10.001, \"lon\": 10.001}}\n",
//! );
//! let buckets = analyze_telemetry(feed).unwrap();
//! assert_eq!(buckets.get(DistanceBucket::AutopilotOn).len(), 1);
//! println!("{}", DistanceSummary::from_buckets(&buckets));
//! ```
//!
//! Fetch and summarize a remote feed:
//! ```rust,no_run
//! use autopilot_track::{analyze_source, FetchOptions};
//!
//! let summary = analyze_source("https://example.com/telemetry", &FetchOptions::default()).unwrap();
//! println!("{summary}");
//! ```
//!
//! # Public API
//!
//! ## Pipeline
//! - [`analyze_telemetry`] - Normalize, filter and bucket an in-memory feed
//! - [`analyze_source`] - Fetch a feed and summarize it
//!
//! ## Stages
//! - [`parse_records`] / [`normalize_feed`] - Feed text to typed records
//! - [`filter_track`] - Chronological order, sentinel fixes removed
//! - [`accumulate_distances`] - Segment lengths bucketed by autopilot state
//! - [`haversine_distance`] - Great-circle distance between two decimal points
//! - [`fetch_source`] - Single-attempt retrieval of `http(s)://` or `file://` sources
//!
//! ## Data Types
//! - [`Record`], [`GeoFix`], [`AutopilotToggle`], [`Point`] - Feed records
//! - [`DistanceBucket`], [`BucketedDistances`] - Accumulator output
//! - [`DistanceSummary`] - Per-state totals and their text rendering
//! - [`TrackError`] - Fetch and malformed-input failures

pub mod conversion;
pub mod distance;
pub mod error;
pub mod fetch;
pub mod filters;
pub mod parser;
pub mod report;
pub mod track;
pub mod types;

pub use conversion::*;
pub use distance::*;
pub use error::*;
pub use fetch::*;
pub use filters::*;
// `parser::record` and `types::record` share a module name
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
pub use report::*;
pub use track::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
