use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::GraphModel;
use crate::permutation::{permutation_isomorphic_bounded, SearchBudget};
use crate::refinement::refinement_isomorphic;

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Cooperative limits applied to the exact search; unbounded by default.
    pub exact_budget: SearchBudget,
}

/// Outcome of one validator invocation. `verdict` always equals the exact
/// result; the heuristic result is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub heuristic_isomorphic: bool,
    pub exact_isomorphic: bool,
    pub verdict: bool,
}

/// Runs the refinement heuristic and the exact permutation search
/// independently over a graph pair.
#[derive(Debug, Clone, Default)]
pub struct IsomorphismValidator {
    config: ValidatorConfig,
}

impl IsomorphismValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, left: &GraphModel, right: &GraphModel) -> Result<ValidationReport> {
        let heuristic_isomorphic = refinement_isomorphic(left, right);
        debug!("refinement labeling verdict: {}", heuristic_isomorphic);

        let exact_isomorphic =
            permutation_isomorphic_bounded(left, right, &self.config.exact_budget)
                .context("exhaustive permutation search did not complete")?;
        debug!("permutation search verdict: {}", exact_isomorphic);

        Ok(ValidationReport {
            heuristic_isomorphic,
            exact_isomorphic,
            verdict: exact_isomorphic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphModel;
    use crate::permutation::CancelFlag;

    fn graph(matrix: &[Vec<u64>]) -> GraphModel {
        GraphModel::from_matrix(matrix).expect("build test graph")
    }

    #[test]
    fn verdict_follows_the_exact_result() {
        // Star vs path: the heuristic accepts, the exact search refuses.
        let star = graph(&[
            vec![0, 1, 1, 1],
            vec![1, 0, 0, 0],
            vec![1, 0, 0, 0],
            vec![1, 0, 0, 0],
        ]);
        let path = graph(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
        ]);

        let report = IsomorphismValidator::default()
            .validate(&star, &path)
            .expect("validate star vs path");
        assert!(report.heuristic_isomorphic);
        assert!(!report.exact_isomorphic);
        assert!(!report.verdict);
    }

    #[test]
    fn agreeing_pair_reports_true_throughout() {
        let path = graph(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let relabeled = graph(&[vec![0, 0, 1], vec![0, 0, 1], vec![1, 1, 0]]);
        let report = IsomorphismValidator::default()
            .validate(&path, &relabeled)
            .expect("validate relabeled paths");
        assert_eq!(
            report,
            ValidationReport {
                heuristic_isomorphic: true,
                exact_isomorphic: true,
                verdict: true,
            }
        );
    }

    #[test]
    fn cancelled_budget_surfaces_as_error() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let validator = IsomorphismValidator::new(ValidatorConfig {
            exact_budget: SearchBudget::with_cancel(cancel),
        });
        let cycle = graph(&[
            vec![0, 1, 0, 0, 1],
            vec![1, 0, 1, 0, 0],
            vec![0, 1, 0, 1, 0],
            vec![0, 0, 1, 0, 1],
            vec![1, 0, 0, 1, 0],
        ]);
        validator
            .validate(&cycle, &cycle.clone())
            .expect_err("cancelled exact search must not report a verdict");
    }

    #[test]
    fn report_round_trips_through_serde() {
        let report = ValidationReport {
            heuristic_isomorphic: true,
            exact_isomorphic: false,
            verdict: false,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let parsed: ValidationReport = serde_json::from_str(&json).expect("parse report");
        assert_eq!(parsed, report);
    }
}
