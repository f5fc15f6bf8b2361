//! # CRS Catalog
//!
//! Knowledge data consumed by the transformation path advisor.
//!
//! - **Transformation records** - registered conversions between two CRS codes
//! - **Accuracy tiers** - structured accuracy, assigned at load time
//! - **Deprecations** - superseded CRS codes and their migration targets
//! - **Code normalization** - `"4326"` and `"epsg:4326"` both become `"EPSG:4326"`

mod accuracy;
mod catalog;
mod code;
mod error;
mod types;

pub use accuracy::{Accuracy, AccuracyTier, METER_TIER_THRESHOLD_M};
pub use catalog::Catalog;
pub use code::{normalize_crs_code, DEFAULT_SCHEME};
pub use error::{CatalogError, Result};
pub use types::{Deprecation, TransformationRecord};
