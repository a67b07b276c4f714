pub mod construction;
pub mod model;
pub mod serialization;

pub use construction::{parse_matrices, GraphLoader};
pub use model::{AdjacencyMatrix, FormatError, GraphModel};
pub use serialization::{GraphWriter, RawEdge, RawGraph};
