//! Cross-validation of the two partitioners.
//!
//! Runs the exhaustive and DP partitioners on the same instance, times
//! both, and treats any objective disagreement as a correctness failure.

use std::time::{Duration, Instant};

use super::{DpPartitioner, ExhaustivePartitioner, Partitioner};
use crate::models::{Instance, PartitionResult};
use crate::sequencing::Sequencer;
use crate::ScheduleError;

/// Results and wall-clock times of both partitioners on one instance.
#[derive(Debug, Clone)]
pub struct PartitionComparison {
    /// Exhaustive partitioner result.
    pub exhaustive: PartitionResult,
    /// DP partitioner result.
    pub dp: PartitionResult,
    /// Time spent in the exhaustive partitioner.
    pub exhaustive_elapsed: Duration,
    /// Time spent in the DP partitioner.
    pub dp_elapsed: Duration,
}

impl PartitionComparison {
    /// The agreed objective.
    pub fn objective(&self) -> i64 {
        self.exhaustive.objective
    }
}

/// Runs both partitioners on `instance` with `sequencer` as oracle.
///
/// # Errors
/// Any error of either partitioner, or [`ScheduleError::SolverMismatch`]
/// when their objectives differ.
pub fn compare_partitioners<S: Sequencer>(
    instance: &Instance,
    sequencer: &S,
) -> Result<PartitionComparison, ScheduleError> {
    let started = Instant::now();
    let exhaustive = ExhaustivePartitioner::new(sequencer).solve(instance)?;
    let exhaustive_elapsed = started.elapsed();

    let started = Instant::now();
    let dp = DpPartitioner::new(sequencer).solve(instance)?;
    let dp_elapsed = started.elapsed();

    tracing::info!(
        exhaustive = exhaustive.objective,
        dp = dp.objective,
        exhaustive_ms = exhaustive_elapsed.as_secs_f64() * 1000.0,
        dp_ms = dp_elapsed.as_secs_f64() * 1000.0,
        "partitioners compared"
    );

    if exhaustive.objective != dp.objective {
        return Err(ScheduleError::SolverMismatch {
            exhaustive: exhaustive.objective,
            dp: dp.objective,
        });
    }

    Ok(PartitionComparison {
        exhaustive,
        dp,
        exhaustive_elapsed,
        dp_elapsed,
    })
}
