//! # CRS Graph
//!
//! Transformation path resolution between coordinate reference systems.
//!
//! ## Features
//!
//! - **Graph building** - registered transformations become directed edges,
//!   reversible ones in both directions
//! - **Path search** - bounded breadth-first search for transformation chains
//! - **Ranking** - shortest chains first, then by least accurate step
//! - **Advice** - recommended chain, alternates and warnings for a CRS pair
//!
//! ## Architecture
//!
//! ```text
//! Catalog (records + version)
//!     │
//!     ├──> Graph Cache (keyed by catalog version)
//!     │      └─ Graph Builder (petgraph)
//!     │           ├─ Nodes: CRS codes
//!     │           └─ Edges: forward + reverse traversals of records
//!     │
//!     ├──> Path Search (bounded BFS)
//!     │      ├─ Per-branch visited bitsets
//!     │      ├─ Stop at max_paths, skip branches past the shortest hit
//!     │      └─ Rank by (steps, worst accuracy tier)
//!     │
//!     └──> Transformation Advisor
//!            ├─ Aggregate accuracy, classify complexity
//!            ├─ Split direct / via paths, pick recommended
//!            └─ Deprecation, wide-area and multi-step warnings
//! ```

mod advisor;
mod aggregate;
mod builder;
mod cache;
mod complexity;
mod config;
mod error;
mod path;
mod search;
mod types;

pub use advisor::{BoundingBox, GraphStats, LocationHint, SuggestionResult, TransformationAdvisor};
pub use aggregate::aggregate_accuracy;
pub use builder::GraphBuilder;
pub use cache::GraphCache;
pub use complexity::{precision_loss_note, Complexity};
pub use config::{
    SearchConfig, DEFAULT_MAX_PATHS, DEFAULT_MAX_STEPS, DEFAULT_WIDE_AREA_THRESHOLD_DEGREES,
};
pub use error::{GraphError, Result};
pub use path::{TransformationPath, TransformationStep};
pub use search::{find_paths, SearchBounds};
pub use types::{TransformationEdge, TransformationGraph};
