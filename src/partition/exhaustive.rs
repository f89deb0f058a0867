//! Exhaustive allocation search.
//!
//! # Algorithm
//!
//! Enumerates every bitmask over the job indices. Bit `j` set means job
//! `j` stays in-house. Masks whose outsourcing spend exceeds the budget
//! are skipped; each remaining in-house set is scored by the sequencer.
//! The first mask reaching the minimum objective wins.
//!
//! # Complexity
//! O(2ⁿ) sequencer calls.

use super::{all_outsourced, check_inputs, Partitioner};
use crate::models::{Job, PartitionResult};
use crate::sequencing::{sequence_or_empty, Sequencer};
use crate::validation::ValidationErrorKind;
use crate::ScheduleError;

/// Largest job count the bitmask enumeration accepts.
pub const MAX_EXHAUSTIVE_JOBS: usize = 62;

/// Exhaustive partitioner over all 2ⁿ allocations.
///
/// Exact with respect to its sequencer; intended as the reference for
/// small instances.
#[derive(Debug, Clone)]
pub struct ExhaustivePartitioner<S> {
    sequencer: S,
}

impl<S: Sequencer> ExhaustivePartitioner<S> {
    /// Creates a partitioner scoring in-house sets with `sequencer`.
    pub fn new(sequencer: S) -> Self {
        Self { sequencer }
    }

    /// The sequencer used as oracle.
    pub fn sequencer(&self) -> &S {
        &self.sequencer
    }
}

impl<S: Sequencer> Partitioner for ExhaustivePartitioner<S> {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn partition(
        &self,
        jobs: &[Job],
        outsourcing_costs: &[i64],
        machine_count: usize,
        budget: i64,
    ) -> Result<PartitionResult, ScheduleError> {
        check_inputs(jobs, outsourcing_costs, machine_count, budget)?;
        let n = jobs.len();
        if n > MAX_EXHAUSTIVE_JOBS {
            return Err(ScheduleError::invalid(
                ValidationErrorKind::TooManyJobs,
                format!("exhaustive search supports up to {MAX_EXHAUSTIVE_JOBS} jobs, got {n}"),
            ));
        }

        let total_masks = 1_u64 << n;
        tracing::debug!(n, budget, total_masks, "exhaustive search started");

        let mut best: Option<(PartitionResult, u64)> = None;
        let mut in_house = Vec::with_capacity(n);
        let mut outsourced = Vec::with_capacity(n);

        for mask in 0..total_masks {
            in_house.clear();
            outsourced.clear();
            let mut cost = Some(0_i64);
            for (j, (&job, &u)) in jobs.iter().zip(outsourcing_costs).enumerate() {
                if (mask >> j) & 1 == 1 {
                    in_house.push(job);
                } else {
                    outsourced.push(job);
                    cost = cost.and_then(|c| c.checked_add(u));
                }
            }
            // A spend past i64::MAX is past any budget.
            let cost = match cost {
                Some(c) if c <= budget => c,
                _ => continue,
            };

            let solution = sequence_or_empty(&self.sequencer, &in_house, machine_count)?;
            let improves = best
                .as_ref()
                .map_or(true, |(b, _)| solution.objective < b.objective);
            if improves {
                best = Some((
                    PartitionResult::new(solution, outsourced.clone(), cost),
                    mask,
                ));
            }
        }

        match best {
            Some((result, mask)) => {
                tracing::debug!(
                    objective = result.objective,
                    outsourcing_cost = result.outsourcing_cost,
                    mask,
                    "exhaustive search finished"
                );
                Ok(result)
            }
            None => Ok(all_outsourced(jobs, outsourcing_costs)),
        }
    }
}
