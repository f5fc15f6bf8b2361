use crate::accuracy::{Accuracy, AccuracyTier};
use crate::code::normalize_crs_code;
use crate::error::{CatalogError, Result};
use crate::types::{Deprecation, TransformationRecord};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.json");

/// Snapshot of the transformation knowledge base.
///
/// The version token identifies the snapshot; anything derived from the
/// records (the path graph in particular) is keyed by it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: String,
    records: Vec<TransformationRecord>,
    deprecated: BTreeMap<String, Deprecation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    transformations: Vec<RawRecord>,
    #[serde(default)]
    deprecated: BTreeMap<String, Deprecation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    id: String,
    from: String,
    to: String,
    method: String,
    accuracy: String,
    #[serde(default)]
    accuracy_tier: Option<AccuracyTier>,
    #[serde(default)]
    reversible: bool,
    #[serde(default)]
    reverse_note: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default, alias = "epsgCode")]
    operation_code: Option<String>,
}

impl RawRecord {
    fn into_record(self) -> TransformationRecord {
        let accuracy = match self.accuracy_tier {
            Some(tier) => Accuracy::new(self.accuracy, tier),
            None => Accuracy::from_description(self.accuracy),
        };
        TransformationRecord {
            id: self.id,
            from: self.from,
            to: self.to,
            method: self.method,
            accuracy,
            reversible: self.reversible,
            reverse_note: self.reverse_note,
            notes: self.notes,
            operation_code: self.operation_code,
        }
    }
}

impl Catalog {
    /// Build a catalog from already-structured records.
    ///
    /// CRS codes are normalized and every record is validated.
    pub fn new(
        version: impl Into<String>,
        records: Vec<TransformationRecord>,
        deprecated: impl IntoIterator<Item = (String, Deprecation)>,
    ) -> Result<Self> {
        let records = records
            .into_iter()
            .map(normalize_record)
            .collect::<Result<Vec<_>>>()?;

        let deprecated = deprecated
            .into_iter()
            .map(|(code, mut deprecation)| {
                deprecation.replacement = normalize_crs_code(&deprecation.replacement);
                (normalize_crs_code(&code), deprecation)
            })
            .collect();

        Ok(Self {
            version: version.into(),
            records,
            deprecated,
        })
    }

    /// Parse a JSON catalog document.
    ///
    /// Without an explicit `version`, the SHA-256 of the document is used so
    /// that any edit produces a new token.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_slice(bytes)?;
        let version = raw
            .version
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| content_digest(bytes));

        let records = raw
            .transformations
            .into_iter()
            .map(RawRecord::into_record)
            .collect();

        let catalog = Self::new(version, records, raw.deprecated)?;
        log::debug!(
            "Loaded catalog {}: {} records, {} deprecated codes",
            catalog.version,
            catalog.records.len(),
            catalog.deprecated.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Catalog bundled with the crate (Japanese datums plus a few global CRSs).
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn records(&self) -> &[TransformationRecord] {
        &self.records
    }

    /// Deprecation advisory for a code, which may be given in any accepted form.
    pub fn deprecation(&self, code: &str) -> Option<&Deprecation> {
        self.deprecated.get(&normalize_crs_code(code))
    }

    pub fn deprecated(&self) -> impl Iterator<Item = (&str, &Deprecation)> {
        self.deprecated.iter().map(|(code, dep)| (code.as_str(), dep))
    }

    /// Every CRS code referenced by at least one record, sorted.
    pub fn crs_codes(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(|r| [r.from.as_str(), r.to.as_str()])
            .collect()
    }
}

fn normalize_record(mut record: TransformationRecord) -> Result<TransformationRecord> {
    let invalid = |reason: &str| CatalogError::InvalidRecord {
        id: record.id.clone(),
        reason: reason.to_string(),
    };

    if record.id.trim().is_empty() {
        return Err(invalid("empty identifier"));
    }
    if is_blank_code(&record.from) {
        return Err(invalid("empty source CRS"));
    }
    if is_blank_code(&record.to) {
        return Err(invalid("empty target CRS"));
    }

    let from = normalize_crs_code(&record.from);
    let to = normalize_crs_code(&record.to);
    if from == to {
        return Err(invalid("source and target CRS are identical"));
    }

    record.from = from;
    record.to = to;
    Ok(record)
}

fn is_blank_code(code: &str) -> bool {
    let code = code.trim();
    code.is_empty() || code.rsplit(':').next().map_or(true, |c| c.trim().is_empty())
}

fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
