use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::model::GraphModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGraph {
    pub node_count: usize,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Helper for exporting graphs as JSON edge lists for external renderers.
pub struct GraphWriter;

impl GraphWriter {
    pub fn to_raw_graph(graph: &GraphModel) -> RawGraph {
        let edges = graph
            .edges()
            .map(|(source, target)| RawEdge {
                source,
                target,
                weight: graph.edge_weight(source, target).unwrap_or(1),
            })
            .collect();
        RawGraph {
            node_count: graph.node_count(),
            edges,
        }
    }

    pub fn to_json_string(graph: &GraphModel) -> Result<String> {
        let raw = Self::to_raw_graph(graph);
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn write_to_path(graph: &GraphModel, path: &Path) -> Result<()> {
        let json = Self::to_json_string(graph)?;
        let mut file =
            File::create(path).with_context(|| format!("create graph export file {:?}", path))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("write graph export to {:?}", path))?;
        Ok(())
    }
}
