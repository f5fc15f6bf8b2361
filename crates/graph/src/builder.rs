use crate::types::{TransformationEdge, TransformationGraph};
use crs_catalog::TransformationRecord;

/// Build the transformation graph from catalog records
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build graph from transformation records
    ///
    /// Every record yields a forward edge; reversible records also yield a
    /// reverse edge. Parallel edges are kept since they may differ in method
    /// or accuracy.
    pub fn build(&self, records: &[TransformationRecord]) -> TransformationGraph {
        let mut graph = TransformationGraph::new();

        for record in records {
            let from = graph.ensure_node(&record.from);
            let to = graph.ensure_node(&record.to);

            graph.add_edge(from, to, Self::forward_edge(record));

            if record.reversible {
                graph.add_edge(to, from, Self::reverse_edge(record));
            }
        }

        log::info!(
            "Built transformation graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }

    fn forward_edge(record: &TransformationRecord) -> TransformationEdge {
        TransformationEdge {
            record_id: record.id.clone(),
            method: record.method.clone(),
            accuracy: record.accuracy.clone(),
            operation_code: record.operation_code.clone(),
            note: record.notes.clone(),
            reverse: false,
        }
    }

    fn reverse_edge(record: &TransformationRecord) -> TransformationEdge {
        TransformationEdge {
            note: record.reverse_note.clone().or_else(|| record.notes.clone()),
            reverse: true,
            ..Self::forward_edge(record)
        }
    }
}
