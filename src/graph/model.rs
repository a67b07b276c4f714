use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Square matrix of non-negative integers; `matrix[i][j] != 0` denotes an
/// edge between nodes `i` and `j`, with the entry kept as the edge weight.
pub type AdjacencyMatrix = Vec<Vec<u64>>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("row {row} has {found} entries, expected {expected} for a square matrix")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("entry at row {row}, column {column} is not a non-negative integer: {token:?}")]
    InvalidEntry {
        row: usize,
        column: usize,
        token: String,
    },
    #[error("expected two adjacency matrices separated by a blank line, found {found}")]
    MatrixCount { found: usize },
}

/// Undirected graph over nodes `0..n`, read-only once built.
///
/// Edges are stored normalized as `(min, max)` pairs, so membership is
/// symmetric and duplicate matrix entries are idempotent. A nonzero diagonal
/// entry yields the self-edge `{i, i}`, counted once. Edge weights are
/// carried for callers that export or render graphs; the isomorphism tests
/// ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    node_count: usize,
    adjacency: Vec<IndexSet<usize>>,
    edges: IndexSet<(usize, usize)>,
    weights: IndexMap<(usize, usize), u64>,
}

impl GraphModel {
    /// Build a graph from an `n x n` matrix. Fails if any row length differs
    /// from the row count; entries are non-negative by type.
    pub fn from_matrix(matrix: &[Vec<u64>]) -> Result<Self, FormatError> {
        let node_count = matrix.len();
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != node_count {
                return Err(FormatError::NotSquare {
                    row,
                    expected: node_count,
                    found: entries.len(),
                });
            }
        }

        let mut graph = Self {
            node_count,
            adjacency: vec![IndexSet::new(); node_count],
            edges: IndexSet::new(),
            weights: IndexMap::new(),
        };
        for (i, entries) in matrix.iter().enumerate() {
            for (j, &entry) in entries.iter().enumerate() {
                if entry != 0 {
                    graph.record_edge(i, j, entry);
                }
            }
        }
        Ok(graph)
    }

    fn record_edge(&mut self, u: usize, v: usize, weight: u64) {
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        let key = normalized(u, v);
        self.edges.insert(key);
        self.weights.insert(key, weight);
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&normalized(u, v))
    }

    /// Nodes adjacent to `u`; empty for out-of-range `u`. A self-loop makes
    /// `u` its own neighbor.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(u).into_iter().flatten().copied()
    }

    pub fn degree(&self, u: usize) -> usize {
        self.adjacency.get(u).map(IndexSet::len).unwrap_or(0)
    }

    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count
    }

    /// Edges as normalized `(source, target)` pairs with `source <= target`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<u64> {
        self.weights.get(&normalized(u, v)).copied()
    }
}

fn normalized(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
