use log::trace;

use crate::graph::GraphModel;

/// Heuristic isomorphism test via neighborhood label refinement.
///
/// Nodes carry no attributes, so every label starts as the empty token and
/// the label vectors are compared position-by-position. Both choices are
/// kept for compatibility with the historical scheme and limit what the
/// test can distinguish: a variant comparing sorted label multisets (and
/// joining neighbor labels with a delimiter to avoid concatenation
/// collisions) would be the formally stronger check. The result is
/// advisory; it may be wrong in either direction and must not be treated
/// as authoritative.
pub fn refinement_isomorphic(left: &GraphModel, right: &GraphModel) -> bool {
    if left.node_count() != right.node_count() || left.edge_count() != right.edge_count() {
        return false;
    }

    refine_labels(left) == refine_labels(right)
}

/// Final label per node after refining to a fixed point.
pub fn refine_labels(graph: &GraphModel) -> Vec<String> {
    refine_to_fixed_point(graph).0
}

/// Refine until the labeling stops changing, never exceeding `n` rounds:
/// each round can only split label classes and there are at most `n` of
/// them, so the cap is reached only if the equality check were ever to
/// misfire.
fn refine_to_fixed_point(graph: &GraphModel) -> (Vec<String>, usize) {
    let node_count = graph.node_count();
    let mut labels = vec![String::new(); node_count];
    let mut rounds = 0;

    while rounds < node_count {
        let next = refine_round(graph, &labels);
        rounds += 1;
        if next == labels {
            break;
        }
        labels = next;
    }

    trace!("label refinement converged after {} rounds", rounds);
    (labels, rounds)
}

/// One refinement round: append the sorted neighbor labels to each node's
/// current label.
fn refine_round(graph: &GraphModel, labels: &[String]) -> Vec<String> {
    graph
        .nodes()
        .map(|node| {
            let mut neighbor_labels: Vec<&str> = graph
                .neighbors(node)
                .map(|neighbor| labels[neighbor].as_str())
                .collect();
            neighbor_labels.sort_unstable();

            let mut refined = labels[node].clone();
            for label in neighbor_labels {
                refined.push_str(label);
            }
            refined
        })
        .collect()
}
