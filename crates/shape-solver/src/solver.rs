use serde::{Deserialize, Serialize};
use shape_types::{ShapeFamily, ValueMap};
use tracing::{debug, instrument, warn};

use crate::rules::{rules_for, Pass};

/// Result of running the fixed-point solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// The seed values plus everything derived from them.
    pub values: ValueMap,
    /// Number of sweeps over the rule list, including the final idle one.
    pub passes: usize,
    /// False only if the pass cap was reached while the last pass still wrote.
    pub converged: bool,
}

/// Configuration for the fixed-point relaxation.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Upper bound on sweeps over a family's rule list.
    pub max_passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_passes: 12 }
    }
}

/// Derive every field of `shape` reachable from `known`.
///
/// `preferred_key` only matters for the length-unit ladder, where it names
/// the unit to convert from when several are filled in.
pub fn solve(shape: ShapeFamily, known: &ValueMap, preferred_key: Option<&str>) -> ValueMap {
    solve_with_config(shape, known, preferred_key, &SolverConfig::default()).values
}

/// Like [`solve`], but for a family given by its string id. An unknown id
/// has no rules, so `known` comes back unchanged.
pub fn solve_by_id(shape_id: &str, known: &ValueMap, preferred_key: Option<&str>) -> ValueMap {
    match shape_id.parse::<ShapeFamily>() {
        Ok(shape) => solve(shape, known, preferred_key),
        Err(err) => {
            debug!(%err, "no rules for shape");
            known.clone()
        }
    }
}

/// Run the family's rules until a pass derives nothing or the pass cap is hit.
///
/// Known values are never overwritten and conflicting inputs are not
/// reconciled: whichever value reaches a field first stays.
#[instrument(level = "debug", skip(known, config), fields(seeds = known.len()))]
pub fn solve_with_config(
    shape: ShapeFamily,
    known: &ValueMap,
    preferred_key: Option<&str>,
    config: &SolverConfig,
) -> SolveReport {
    let rules = rules_for(shape);
    let mut values = known.clone();
    let mut passes = 0;
    let mut converged = false;

    while passes < config.max_passes {
        passes += 1;
        let mut pass = Pass::new(&mut values, preferred_key);
        for rule in rules {
            rule(&mut pass);
        }
        if pass.writes() == 0 {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(passes, derived = values.len() - known.len(), "fixed point reached");
    } else {
        warn!(passes, "pass cap reached before fixed point");
    }

    SolveReport {
        values,
        passes,
        converged,
    }
}
