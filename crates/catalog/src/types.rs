use crate::accuracy::Accuracy;
use serde::{Deserialize, Serialize};

/// A registered, directly known conversion between two CRS codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationRecord {
    /// Stable identifier within the catalog
    pub id: String,

    /// Source CRS, canonical `SCHEME:CODE`
    pub from: String,

    /// Target CRS, canonical `SCHEME:CODE`
    pub to: String,

    /// Method name, e.g. "Helmert 7-parameter"
    pub method: String,

    pub accuracy: Accuracy,

    /// Whether the inverse conversion is also valid
    pub reversible: bool,

    /// Note that only applies when the record is used backwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// External reference of the operation itself (e.g. an EPSG operation code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_code: Option<String>,
}

/// Advisory attached to a superseded CRS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    pub note: String,

    /// CRS code users should migrate to
    pub replacement: String,
}
