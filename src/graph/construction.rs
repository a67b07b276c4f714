use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::model::{AdjacencyMatrix, FormatError, GraphModel};

/// Loader for the textual adjacency-matrix format: whitespace-separated
/// integer rows, with a blank line separating the two matrices of a pair.
#[derive(Debug, Default)]
pub struct GraphLoader;

impl GraphLoader {
    /// Checked build from an in-memory matrix.
    pub fn from_matrix(matrix: &[Vec<u64>]) -> Result<GraphModel, FormatError> {
        GraphModel::from_matrix(matrix)
    }

    /// Parse a two-matrix document and build both graphs.
    pub fn pair_from_str(text: &str) -> Result<(GraphModel, GraphModel), FormatError> {
        let matrices = parse_matrices(text)?;
        if matrices.len() != 2 {
            return Err(FormatError::MatrixCount {
                found: matrices.len(),
            });
        }
        let mut matrices = matrices.into_iter();
        let first = GraphModel::from_matrix(&matrices.next().unwrap_or_default())?;
        let second = GraphModel::from_matrix(&matrices.next().unwrap_or_default())?;
        Ok((first, second))
    }

    /// Read a matrix-pair document from a reader.
    pub fn pair_from_reader<R: Read>(mut reader: R) -> Result<(GraphModel, GraphModel)> {
        let mut buf = String::new();
        reader
            .read_to_string(&mut buf)
            .context("read adjacency matrix document")?;
        Ok(Self::pair_from_str(&buf)?)
    }

    /// Read a matrix-pair document from a file.
    pub fn pair_from_path(path: &Path) -> Result<(GraphModel, GraphModel)> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open adjacency matrix file {:?}", path))?;
        Self::pair_from_str(&text)
            .with_context(|| format!("parse adjacency matrix file {:?}", path))
    }
}

/// Split a document into matrices on blank lines; rows are
/// whitespace-separated non-negative integers.
pub fn parse_matrices(text: &str) -> Result<Vec<AdjacencyMatrix>, FormatError> {
    let mut matrices = Vec::new();
    let mut current: AdjacencyMatrix = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                matrices.push(std::mem::take(&mut current));
            }
            continue;
        }

        let row = current.len();
        let entries = line
            .split_whitespace()
            .enumerate()
            .map(|(column, token)| {
                token.parse::<u64>().map_err(|_| FormatError::InvalidEntry {
                    row,
                    column,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<u64>, FormatError>>()?;
        current.push(entries);
    }
    if !current.is_empty() {
        matrices.push(current);
    }

    Ok(matrices)
}
