use crs_catalog::Accuracy;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::path::TransformationStep;

/// Edge in the transformation graph: one usable direction of a catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationEdge {
    /// Catalog record this edge was derived from
    pub record_id: String,

    pub method: String,

    pub accuracy: Accuracy,

    pub operation_code: Option<String>,

    /// Direction-specific note (`reverseNote` on reverse edges when present)
    pub note: Option<String>,

    /// Traverses the record from its target back to its source
    pub reverse: bool,
}

/// Directed multigraph of CRS codes connected by registered transformations.
pub struct TransformationGraph {
    /// CRS code -> CRS code, one edge per usable record direction
    pub graph: DiGraph<String, TransformationEdge>,

    /// CRS code -> NodeIndex mapping for fast lookup
    pub crs_index: HashMap<String, NodeIndex>,
}

impl TransformationGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            crs_index: HashMap::new(),
        }
    }

    /// Node for a CRS code, created on first use.
    pub fn ensure_node(&mut self, code: &str) -> NodeIndex {
        if let Some(&idx) = self.crs_index.get(code) {
            return idx;
        }
        let idx = self.graph.add_node(code.to_string());
        self.crs_index.insert(code.to_string(), idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: TransformationEdge) -> EdgeIndex {
        self.graph.add_edge(from, to, edge)
    }

    /// Find node by CRS code (canonical form)
    pub fn find_node(&self, code: &str) -> Option<NodeIndex> {
        self.crs_index.get(code).copied()
    }

    pub fn crs_code(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Outgoing edges of a node in insertion (catalog) order.
    pub fn outgoing(&self, node: NodeIndex) -> Vec<EdgeReference<'_, TransformationEdge>> {
        // petgraph yields the most recently added edge first
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.reverse();
        edges
    }

    /// Materialize the traversal of one edge.
    pub fn step(&self, edge: EdgeIndex) -> Option<TransformationStep> {
        let (from, to) = self.graph.edge_endpoints(edge)?;
        let weight = self.graph.edge_weight(edge)?;
        Some(TransformationStep {
            from: self.crs_code(from)?.to_string(),
            to: self.crs_code(to)?.to_string(),
            method: weight.method.clone(),
            accuracy: weight.accuracy.clone(),
            operation_code: weight.operation_code.clone(),
            note: weight.note.clone(),
            is_reverse: weight.reverse,
            record_id: weight.record_id.clone(),
        })
    }

    /// Edges leaving `from` that arrive at `to`, in catalog order.
    pub fn edges_between(&self, from: &str, to: &str) -> Vec<&TransformationEdge> {
        let (Some(from), Some(to)) = (self.find_node(from), self.find_node(to)) else {
            return Vec::new();
        };
        self.outgoing(from)
            .into_iter()
            .filter(|e| e.target() == to)
            .map(|e| e.weight())
            .collect()
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for TransformationGraph {
    fn default() -> Self {
        Self::new()
    }
}
