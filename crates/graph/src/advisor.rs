use crate::cache::GraphCache;
use crate::complexity::Complexity;
use crate::config::SearchConfig;
use crate::error::{GraphError, Result};
use crate::path::TransformationPath;
use crate::search::{find_paths, SearchBounds};
use crs_catalog::{normalize_crs_code, Catalog};
use serde::{Deserialize, Serialize};

/// Geographic extent in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    pub fn lat_span(&self) -> f64 {
        (self.north - self.south).abs()
    }

    /// Longitude span; a box with `west > east` crosses the antimeridian.
    pub fn lon_span(&self) -> f64 {
        if self.west <= self.east {
            self.east - self.west
        } else {
            self.east + 360.0 - self.west
        }
    }
}

/// Optional hint about where the coordinates are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHint {
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

/// Advice for converting between two CRS codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// Best single-step transformation, if one is registered
    pub direct_path: Option<TransformationPath>,

    /// Further single-step transformations between the same pair
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_direct_paths: Vec<TransformationPath>,

    /// Multi-step chains, best first
    pub via_paths: Vec<TransformationPath>,

    pub recommended: TransformationPath,

    pub warnings: Vec<String>,
}

/// Graph statistics for a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub version: String,
    pub nodes: usize,
    pub edges: usize,
}

/// Entry point for transformation path advice.
///
/// Owns the graph cache; construct one and share it for the lifetime of a
/// catalog (or across reloads, calling [`invalidate`](Self::invalidate)).
#[derive(Default)]
pub struct TransformationAdvisor {
    config: SearchConfig,
    cache: GraphCache,
}

impl TransformationAdvisor {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: GraphCache::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Suggest how to get from `source` to `target`.
    ///
    /// Codes may be given with or without scheme (`"4326"`, `"EPSG:4326"`).
    /// Fails with [`GraphError::NoPath`] only when no chain exists within the
    /// configured bounds; everything else is reported as a warning.
    pub fn suggest(
        &self,
        catalog: &Catalog,
        source: &str,
        target: &str,
        location: Option<&LocationHint>,
    ) -> Result<SuggestionResult> {
        let source = normalize_crs_code(source);
        let target = normalize_crs_code(target);

        if source == target {
            return Ok(SuggestionResult {
                direct_path: None,
                alternative_direct_paths: Vec::new(),
                via_paths: Vec::new(),
                recommended: TransformationPath::no_transformation(),
                warnings: vec![format!(
                    "Source and target CRS are identical ({source}); no transformation is required"
                )],
            });
        }

        let mut warnings = Vec::new();

        if let Some(dep) = catalog.deprecation(&source) {
            warnings.push(format!(
                "{source} is deprecated: {}. Consider migrating to {}",
                dep.note, dep.replacement
            ));
        }
        if let Some(dep) = catalog.deprecation(&target) {
            warnings.push(format!(
                "Target CRS {target} is deprecated: {}. Consider targeting {} instead",
                dep.note, dep.replacement
            ));
        }

        let graph = self.cache.get_graph(catalog);
        let paths = find_paths(&graph, &source, &target, self.config.bounds());

        if paths.is_empty() {
            return Err(GraphError::NoPath {
                from: source,
                to: target,
            });
        }

        let (direct, via_paths): (Vec<_>, Vec<_>) = paths.into_iter().partition(|p| p.len() == 1);
        let mut direct = direct.into_iter();
        let direct_path = direct.next();
        let alternative_direct_paths: Vec<_> = direct.collect();

        let recommended = direct_path
            .clone()
            .or_else(|| via_paths.first().cloned())
            .unwrap_or_else(TransformationPath::unresolved);

        if let Some(bbox) = location.and_then(|l| l.bounding_box.as_ref()) {
            let threshold = self.config.wide_area_threshold_degrees;
            let (lat, lon) = (bbox.lat_span(), bbox.lon_span());
            if lat > threshold || lon > threshold {
                warnings.push(format!(
                    "Area spans {lat:.1}° latitude by {lon:.1}° longitude (over {threshold}°); \
                     transformation accuracy may vary across the region"
                ));
            }
        }

        if recommended.complexity == Complexity::Complex {
            warnings.push(format!(
                "Recommended route chains {} transformations; errors accumulate at each step, \
                 verify results against control points",
                recommended.len()
            ));
        }

        log::debug!(
            "Suggested {source} -> {target}: direct={}, via={}, warnings={}",
            direct_path.is_some(),
            via_paths.len(),
            warnings.len()
        );

        Ok(SuggestionResult {
            direct_path,
            alternative_direct_paths,
            via_paths,
            recommended,
            warnings,
        })
    }

    /// Ranked candidate chains with caller-chosen bounds.
    pub fn find_paths(
        &self,
        catalog: &Catalog,
        source: &str,
        target: &str,
        bounds: SearchBounds,
    ) -> Vec<TransformationPath> {
        let source = normalize_crs_code(source);
        let target = normalize_crs_code(target);
        let graph = self.cache.get_graph(catalog);
        find_paths(&graph, &source, &target, bounds)
    }

    pub fn graph_stats(&self, catalog: &Catalog) -> GraphStats {
        let graph = self.cache.get_graph(catalog);
        GraphStats {
            version: catalog.version().to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    }

    /// Forget the cached graph, e.g. after reloading catalog data.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn cached_version(&self) -> Option<String> {
        self.cache.cached_version()
    }
}
